//! HTML page and health endpoints.

use axum::{extract::State, http::StatusCode, response::Html, response::IntoResponse};
use tracing::debug;

use super::super::assets;
use super::super::AppState;

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Serve the main page, preferring `index.html` from the static directory.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    if let Some(dir) = &state.static_dir {
        let path = dir.join("index.html");
        match tokio::fs::read_to_string(&path).await {
            Ok(page) => return Html(page),
            Err(e) => debug!("No custom index at {}: {}", path.display(), e),
        }
    }
    Html(assets::INDEX_HTML.to_string())
}
