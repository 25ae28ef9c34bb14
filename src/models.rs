//! Wire types for the search backend and their display-time fallbacks.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Thumbnail used when a hit carries none.
pub const DEFAULT_THUMBNAIL: &str = "pdf.jpg";

/// Response of `POST /binaries/searching`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching documents in the index.
    #[serde(default)]
    pub total: u64,
    /// Matching documents in backend ranking order.
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// One search hit.
///
/// `score`, `doc_type`, and `created_at` are produced by the backend but
/// not rendered; they are kept so a hit round-trips without loss.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hit {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Excerpt fragments with the backend's own highlight markup.
    #[serde(default)]
    pub highlights: String,
    #[serde(default)]
    pub author: Option<String>,
    /// Registration time, either an ISO-ish datetime string or epoch
    /// milliseconds depending on the backend version.
    #[serde(default, deserialize_with = "deserialize_registered_at")]
    pub registered_at: String,
    /// Comma-separated keyword list.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Stored filename of the original document.
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub doc_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Hit {
    /// Title to display, falling back to the document id.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => &self.id,
        }
    }

    pub fn display_author(&self) -> &str {
        self.author.as_deref().unwrap_or("unknown")
    }

    pub fn display_tags(&self) -> &str {
        self.tags.as_deref().unwrap_or("--")
    }

    /// Thumbnail path under the static image root.
    pub fn thumbnail_url(&self) -> String {
        format!(
            "images/{}",
            self.thumbnail.as_deref().unwrap_or(DEFAULT_THUMBNAIL)
        )
    }

    /// Download path of the original file.
    pub fn download_url(&self) -> String {
        format!("files/{}", self.reference)
    }

    /// Relative link to the detail page for this hit.
    pub fn detail_url(&self) -> String {
        format!("details?id={}", urlencoding::encode(&self.id))
    }

    /// Calendar-date part of `registered_at`, e.g. "Sun Jan 20 2019".
    /// Falls back to the raw string when it does not parse.
    pub fn registered_date(&self) -> String {
        match parse_datetime(&self.registered_at) {
            Some(dt) => dt.format("%a %b %e %Y").to_string(),
            None => self.registered_at.clone(),
        }
    }

    /// Clock-time part of `registered_at`, e.g. "20:00:00". Empty when the
    /// raw string does not parse (the date accessor already shows it whole).
    pub fn registered_time(&self) -> String {
        match parse_datetime(&self.registered_at) {
            Some(dt) => dt.format("%H:%M:%S").to_string(),
            None => String::new(),
        }
    }
}

/// Parse the datetime formats the backend has been seen to emit.
fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    None
}

/// Accept `registeredAt` as either a string or epoch milliseconds; older
/// backends serialize the field as a JSON number.
fn deserialize_registered_at<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RegisteredAt {
        Text(String),
        EpochMillis(i64),
        Absent(()),
    }

    match RegisteredAt::deserialize(deserializer)? {
        RegisteredAt::Text(s) => Ok(s),
        RegisteredAt::EpochMillis(ms) => Ok(DateTime::from_timestamp_millis(ms)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default()),
        RegisteredAt::Absent(()) => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_hit_json() -> &'static str {
        r#"{
            "id": "searchable:sample1.pdf",
            "thumbnail": "pdf.jpg",
            "author": "j.molina",
            "highlights": "Lorem <mark>ipsum</mark> dolor sit amet.",
            "registeredAt": "2019-01-20 20:00",
            "title": "searchable:sample1.pdf",
            "reference": "sample1.pdf",
            "tags": "pdf, printer"
        }"#
    }

    #[test]
    fn decodes_a_backend_hit() {
        let hit: Hit = serde_json::from_str(sample_hit_json()).unwrap();
        assert_eq!(hit.id, "searchable:sample1.pdf");
        assert_eq!(hit.display_author(), "j.molina");
        assert_eq!(hit.display_tags(), "pdf, printer");
        assert_eq!(hit.thumbnail_url(), "images/pdf.jpg");
        assert_eq!(hit.download_url(), "files/sample1.pdf");
    }

    #[test]
    fn missing_optional_fields_fall_back() {
        let hit: Hit = serde_json::from_str(
            r#"{"id": "doc-1", "highlights": "x", "reference": "doc-1.pdf"}"#,
        )
        .unwrap();
        assert_eq!(hit.display_author(), "unknown");
        assert_eq!(hit.display_tags(), "--");
        assert_eq!(hit.thumbnail_url(), "images/pdf.jpg");
        assert_eq!(hit.display_title(), "doc-1");
    }

    #[test]
    fn title_falls_back_to_id_when_empty() {
        let hit: Hit =
            serde_json::from_str(r#"{"id": "doc-2", "title": "", "reference": "r"}"#).unwrap();
        assert_eq!(hit.display_title(), "doc-2");
    }

    #[test]
    fn registered_at_splits_into_date_and_time() {
        let hit: Hit = serde_json::from_str(sample_hit_json()).unwrap();
        assert_eq!(hit.registered_date(), "Sun Jan 20 2019");
        assert_eq!(hit.registered_time(), "20:00:00");
    }

    #[test]
    fn unparseable_registered_at_is_shown_raw() {
        let hit: Hit = serde_json::from_str(
            r#"{"id": "doc-3", "registeredAt": "sometime last year", "reference": "r"}"#,
        )
        .unwrap();
        assert_eq!(hit.registered_date(), "sometime last year");
        assert_eq!(hit.registered_time(), "");
    }

    #[test]
    fn registered_at_accepts_epoch_millis() {
        let hit: Hit = serde_json::from_str(
            r#"{"id": "doc-4", "registeredAt": 1548014400000, "reference": "r"}"#,
        )
        .unwrap();
        assert!(hit.registered_at.starts_with("2019-01-20T"));
    }

    #[test]
    fn detail_url_escapes_the_id() {
        let hit = Hit {
            id: "searchable:a b".to_string(),
            ..Default::default()
        };
        assert_eq!(hit.detail_url(), "details?id=searchable%3Aa%20b");
    }

    #[test]
    fn decodes_a_full_search_result() {
        let json = format!(
            r#"{{"total": 3, "hits": [{0}, {0}]}}"#,
            sample_hit_json()
        );
        let result: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.total, 3);
        assert_eq!(result.hits.len(), 2);
    }
}
