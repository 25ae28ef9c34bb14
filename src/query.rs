//! Query-string parsing for the detail page.
//!
//! The detail page historically extracted its identifier by stripping
//! everything up to the first `=`, which breaks with more than one
//! parameter. This parser returns proper name/value pairs instead, while
//! keeping the old fallback: a query string without any `=` is taken whole
//! as the identifier.

/// Parse a raw query string (with or without a leading `?`) into decoded
/// name/value pairs, in order of appearance. Pairs without a value decode
/// to an empty string.
pub fn parse(raw: &str) -> Vec<(String, String)> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => (decode(name), decode(value)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

/// Extract the item identifier for the detail page.
///
/// The `id` parameter wins when present. A query string containing no `=`
/// at all is taken whole as the identifier. Otherwise there is no id.
pub fn item_id(raw: &str) -> Option<String> {
    let stripped = raw.strip_prefix('?').unwrap_or(raw);
    if stripped.is_empty() {
        return None;
    }

    if !stripped.contains('=') {
        return Some(decode(stripped));
    }

    parse(stripped)
        .into_iter()
        .find(|(name, _)| name == "id")
        .map(|(_, value)| value)
}

/// Percent-decode, replacing `+` with a space first (form encoding).
/// Undecodable input is kept verbatim.
fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
