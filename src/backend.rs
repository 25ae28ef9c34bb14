//! HTTP client for the external search backend.
//!
//! Two endpoints, both reached under the configured base URL:
//! `POST binaries/searching` with the raw query text as the body, and
//! `GET binary/{id}` for a single item.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::Settings;
use crate::models::SearchResult;

/// Content type the backend expects on search requests. The body is the
/// raw query text, not JSON; the declared type is part of the backend's
/// contract and is kept as-is.
const SEARCH_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Errors from talking to the search backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("backend returned {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("backend returned a malformed body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("invalid backend endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Client for the search backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    /// Build a client from settings.
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(&settings.user_agent)
            .timeout(Duration::from_secs(settings.request_timeout))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            base_url: settings.backend_url.clone(),
        })
    }

    /// Run a full-text search. The query is sent byte-for-byte as the
    /// request body; exactly one request is issued per call.
    pub async fn search(&self, query: &str) -> Result<SearchResult, BackendError> {
        let url = self.base_url.join("binaries/searching")?;
        debug!(%url, query, "searching backend");

        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, SEARCH_CONTENT_TYPE)
            .body(query.to_string())
            .send()
            .await
            .map_err(BackendError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status,
                url: url.to_string(),
            });
        }

        response
            .json::<SearchResult>()
            .await
            .map_err(BackendError::Decode)
    }

    /// Fetch a single item by id. The payload is arbitrary JSON and is
    /// passed through uninterpreted.
    pub async fn fetch_item(&self, id: &str) -> Result<Value, BackendError> {
        let url = self
            .base_url
            .join(&format!("binary/{}", urlencoding::encode(id)))?;
        debug!(%url, "fetching item");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(BackendError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                status,
                url: url.to_string(),
            });
        }

        response.json::<Value>().await.map_err(BackendError::Decode)
    }
}
