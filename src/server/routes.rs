//! Router configuration for the web server.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{debug, warn};

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        // Document endpoints
        .route("/api/analyze-document", post(handlers::analyze_document))
        .route("/api/summarize-document", post(handlers::summarize_document))
        .route("/api/compare-documents", post(handlers::compare_documents))
        .route("/api/document-comparison", post(handlers::compare_documents))
        // Speech and chat
        .route("/api/text-to-speech", post(handlers::text_to_speech))
        .route("/api/chat-legal-advisor", post(handlers::chat_legal_advisor))
        // Templates
        .route(
            "/api/legal-templates",
            get(handlers::list_templates).post(handlers::generate_template),
        );

    match &state.static_dir {
        Some(dir) if dir.is_dir() => {
            debug!("Serving static files from {}", dir.display());
            router = router.nest_service("/static", ServeDir::new(dir));
        }
        Some(dir) => warn!("Static directory {} not found, skipping", dir.display()),
        None => {}
    }

    router
        .layer(DefaultBodyLimit::max(state.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
