//! Route table for the web interface.

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::{handlers, AppState};

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::search_page))
        .route("/search", post(handlers::run_search))
        .route("/details", get(handlers::detail_page))
        .route("/static/style.css", get(handlers::stylesheet))
        .nest_service("/images", ServeDir::new(&state.images_dir))
        .nest_service("/files", ServeDir::new(&state.files_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
