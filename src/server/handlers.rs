//! Page controllers.
//!
//! The search flow deliberately shows no error state: a failed backend
//! call is logged and the bare page comes back, indistinguishable to the
//! user from never having searched. The detail flow does surface errors,
//! since it is a leaf page with nothing else to protect.

use axum::extract::{RawQuery, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Form;
use serde::Deserialize;
use tracing::{error, info};

use super::{templates, AppState};
use crate::error::Error;

/// Search form payload.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub q: String,
}

/// `GET /` - the search page before any search has run.
pub async fn search_page() -> Html<String> {
    Html(templates::search_page(None))
}

/// `POST /search` - the search controller.
///
/// A whitespace-only query is a no-op: no backend request, no error, the
/// bare page again. Otherwise the query goes to the backend verbatim and
/// the response renders as the header sentence plus the card grid.
pub async fn run_search(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Html<String> {
    if form.q.trim().is_empty() {
        return Html(templates::search_page(None));
    }

    info!(query = %form.q, "searching");

    match state.backend.search(&form.q).await {
        Ok(result) => {
            let section = templates::results_section(&form.q, &result);
            Html(templates::search_page(Some(&section)))
        }
        Err(err) => {
            // Deliberate gap: the user sees the bare page, not an error
            // message.
            error!(query = %form.q, error = %err, "search failed");
            Html(templates::search_page(None))
        }
    }
}

/// `GET /details` - the detail controller.
///
/// The id comes from the query string (`?id=...`, or the whole string when
/// it carries no `=`). Every failure lands on the error page.
pub async fn detail_page(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Html<String> {
    match load_details(&state, raw.as_deref().unwrap_or("")).await {
        Ok(page) => Html(page),
        Err(err) => {
            error!(error = %err, "failed to load item details");
            Html(templates::error_page(&err.to_string()))
        }
    }
}

async fn load_details(state: &AppState, raw_query: &str) -> Result<String, Error> {
    let id = crate::query::item_id(raw_query).ok_or(Error::MissingItemId)?;
    info!(%id, "loading details");

    let item = state.backend.fetch_item(&id).await?;
    Ok(templates::detail_page(&id, &item))
}

/// `GET /static/style.css`.
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], templates::CSS)
}
