//! Web server hosting the search and detail pages.
//!
//! The server renders everything; the browser only submits the search form
//! and follows links. Search queries are forwarded to the external backend
//! and results come back as server-rendered result cards.

mod handlers;
mod routes;
mod templates;

pub use routes::create_router;

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::backend::BackendClient;
use crate::config::Settings;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
    pub images_dir: PathBuf,
    pub files_dir: PathBuf,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let backend = BackendClient::new(settings)?;

        Ok(Self {
            backend,
            images_dir: settings.images_dir.clone(),
            files_dir: settings.files_dir.clone(),
        })
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
