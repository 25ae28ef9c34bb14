//! HTML templates for the web interface.
//!
//! Every interpolated value goes through [`esc`] by default; [`Raw`] is the
//! explicit opt-in for markup that must land in the page unescaped. The
//! only `Raw` user is the backend highlight fragment, which carries the
//! FTS engine's own `<mark>` tags.

use std::fmt;

use crate::models::{Hit, SearchResult};

/// Escape a value for interpolation into HTML text or attributes.
pub fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Marker for trusted markup inserted without escaping.
pub struct Raw<'a>(pub &'a str);

impl fmt::Display for Raw<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Base HTML page.
pub fn base_page(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - docfind</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header id="main-header">
        <nav>
            <a href="/" class="logo">docfind</a>
        </nav>
    </header>
    <main>
        {content}
    </main>
</body>
</html>"#,
        title = esc(title),
        content = content
    )
}

/// Search page: the form plus, after a search ran, the results section.
/// Before any search the results container is present but hidden, so the
/// page keeps a stable element layout.
pub fn search_page(results: Option<&str>) -> String {
    let results_section = match results {
        Some(section) => format!(
            r#"<section id="results">
            {}
        </section>"#,
            section
        ),
        None => r#"<section id="results" hidden></section>"#.to_string(),
    };

    let content = format!(
        r#"<form id="search_form" method="post" action="/search">
            <input type="text" id="inputSearch" name="q" placeholder="Search documents..." autocomplete="off" autofocus>
            <button type="submit">search</button>
        </form>
        {}"#,
        results_section
    );

    base_page("Search", &content)
}

/// Results section: header sentence plus the card grid, in hit order.
pub fn results_section(term: &str, result: &SearchResult) -> String {
    let mut cards = String::new();
    for hit in &result.hits {
        cards.push_str(&result_card(hit));
    }

    format!(
        r#"<p id="header-display"><strong class="text-danger">{total}</strong> results were found for the search for <strong class="text-danger">{term}</strong></p>
        <div id="results-grid">
            {cards}
        </div>"#,
        total = result.total,
        term = esc(term),
        cards = cards
    )
}

/// One result card. The highlight fragment is the single raw insertion;
/// the backend wraps matched terms in its own markup.
pub fn result_card(hit: &Hit) -> String {
    let detail_url = hit.detail_url();
    let download_url = hit.download_url();

    format!(
        r#"
        <article class="search-result">
            <a href="{detail_url}" title="{reference}" class="thumbnail"><img src="{thumbnail}" alt="{reference}"></a>
            <ul class="meta-search">
                <li class="author">{author}</li>
                <li class="calendar">{calendar}</li>
                <li class="time">{time}</li>
                <li class="tags">{tags}</li>
            </ul>
            <div class="excerpt">
                <h3><a href="{detail_url}">{title}</a></h3>
                <p>{highlights}</p>
                <a class="download" href="{download_url}" title="{reference}">download</a>
            </div>
        </article>"#,
        detail_url = esc(&detail_url),
        download_url = esc(&download_url),
        reference = esc(&download_url),
        thumbnail = esc(&hit.thumbnail_url()),
        author = esc(hit.display_author()),
        calendar = esc(&hit.registered_date()),
        time = esc(&hit.registered_time()),
        tags = esc(hit.display_tags()),
        title = esc(hit.display_title()),
        highlights = Raw(&hit.highlights),
    )
}

/// Detail page. The item payload is arbitrary backend JSON and is shown
/// uninterpreted.
pub fn detail_page(id: &str, item: &serde_json::Value) -> String {
    let pretty = serde_json::to_string_pretty(item).unwrap_or_else(|_| item.to_string());

    let content = format!(
        r#"<nav class="breadcrumb">
            <a href="/">Search</a> / {id}
        </nav>
        <section id="item-detail">
            <pre>{body}</pre>
        </section>"#,
        id = esc(id),
        body = esc(&pretty)
    );

    base_page(id, &content)
}

/// Blocking error page for the detail flow.
pub fn error_page(message: &str) -> String {
    let content = format!(
        r#"<nav class="breadcrumb">
            <a href="/">Search</a>
        </nav>
        <section class="error-box">
            <p>{}</p>
        </section>"#,
        esc(message)
    );

    base_page("Error", &content)
}

/// CSS styles for the web interface - minimal text-based design.
pub const CSS: &str = r#"
:root {
    --bg: #fff;
    --text: #222;
    --text-muted: #666;
    --link: #0066cc;
    --link-hover: #004499;
    --border: #ccc;
    --accent: #cc3333;
    --highlight: #fffbcc;
}

@media (prefers-color-scheme: dark) {
    :root {
        --bg: #1a1a1a;
        --text: #e0e0e0;
        --text-muted: #888;
        --link: #6ab0ff;
        --link-hover: #8dc4ff;
        --border: #444;
        --accent: #ff6b6b;
        --highlight: #3a3520;
    }
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: 'Lucida Console', 'Courier New', monospace;
    font-size: 14px;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

#main-header {
    border-bottom: 1px solid var(--border);
    padding: 0.5rem 1rem;
    font-size: 13px;
}

#main-header .logo {
    font-weight: bold;
    letter-spacing: 1px;
}

main {
    max-width: 900px;
    margin: 0 auto;
    padding: 1rem;
}

#search_form {
    display: flex;
    gap: 0.5rem;
    margin-bottom: 1rem;
}

#inputSearch {
    flex: 1;
    padding: 0.4rem 0.6rem;
    font-family: inherit;
    font-size: 14px;
    border: 1px solid var(--border);
    background: var(--bg);
    color: var(--text);
}

#inputSearch:focus {
    outline: none;
    border-color: var(--link);
}

#search_form button {
    padding: 0.4rem 1rem;
    background: transparent;
    color: var(--link);
    border: 1px solid var(--border);
    font-family: inherit;
    cursor: pointer;
}
#search_form button:hover { background: var(--highlight); }

#header-display {
    font-size: 13px;
    color: var(--text-muted);
    padding-bottom: 0.5rem;
    border-bottom: 1px solid var(--border);
}

.text-danger { color: var(--accent); }

.search-result {
    display: flex;
    gap: 1rem;
    padding: 0.75rem 0;
    border-bottom: 1px solid var(--border);
}

.search-result .thumbnail img {
    width: 80px;
    border: 1px solid var(--border);
}

.meta-search {
    list-style: none;
    min-width: 140px;
    font-size: 12px;
    color: var(--text-muted);
}

.excerpt { flex: 1; }

.excerpt h3 {
    font-size: 14px;
    margin-bottom: 0.25rem;
}

.excerpt p { font-size: 13px; }

.excerpt mark {
    background: var(--highlight);
    color: inherit;
}

.download {
    display: inline-block;
    margin-top: 0.25rem;
    font-size: 12px;
}

.breadcrumb {
    font-size: 12px;
    color: var(--text-muted);
    margin-bottom: 0.75rem;
}

#item-detail pre {
    background: var(--highlight);
    padding: 0.75rem;
    font-size: 12px;
    overflow-x: auto;
    white-space: pre-wrap;
    word-wrap: break-word;
    border: 1px solid var(--border);
}

.error-box {
    border: 1px solid var(--accent);
    color: var(--accent);
    padding: 0.75rem;
    font-size: 13px;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchResult;

    fn hit(id: &str) -> Hit {
        Hit {
            id: id.to_string(),
            highlights: "Lorem <mark>ipsum</mark> dolor".to_string(),
            reference: format!("{}.pdf", id),
            ..Default::default()
        }
    }

    #[test]
    fn esc_neutralizes_markup() {
        assert_eq!(
            esc(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn raw_passes_markup_through() {
        assert_eq!(format!("{}", Raw("<mark>hi</mark>")), "<mark>hi</mark>");
    }

    #[test]
    fn header_sentence_escapes_the_search_term() {
        let result = SearchResult { total: 0, hits: vec![] };
        let section = results_section("<script>steal()</script>", &result);
        assert!(!section.contains("<script>"));
        assert!(section.contains("&lt;script&gt;steal()&lt;/script&gt;"));
        assert!(section.contains(r#"<strong class="text-danger">0</strong>"#));
    }

    #[test]
    fn grid_renders_cards_in_hit_order() {
        let result = SearchResult {
            total: 2,
            hits: vec![hit("doc-a"), hit("doc-b")],
        };
        let section = results_section("lorem", &result);

        assert_eq!(section.matches("<article").count(), 2);
        let a = section.find("details?id=doc-a").unwrap();
        let b = section.find("details?id=doc-b").unwrap();
        assert!(a < b);
    }

    #[test]
    fn card_keeps_highlight_markup_and_download_link() {
        let card = result_card(&hit("doc-a"));
        assert!(card.contains("<mark>ipsum</mark>"));
        assert!(card.contains(r#"href="files/doc-a.pdf""#));
        assert!(card.contains(r#"src="images/pdf.jpg""#));
    }

    #[test]
    fn card_falls_back_for_missing_fields() {
        let card = result_card(&hit("doc-a"));
        assert!(card.contains(r#"<li class="author">unknown</li>"#));
        assert!(card.contains(r#"<li class="tags">--</li>"#));
    }

    #[test]
    fn bare_search_page_hides_the_results_container() {
        let page = search_page(None);
        assert!(page.contains(r#"<section id="results" hidden>"#));
        assert!(page.contains(r#"id="search_form""#));
        assert!(page.contains(r#"id="inputSearch""#));
    }

    #[test]
    fn detail_page_escapes_the_payload() {
        let item = serde_json::json!({ "body": "<script>x</script>" });
        let page = detail_page("doc-1", &item);
        assert!(!page.contains("<script>x</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
