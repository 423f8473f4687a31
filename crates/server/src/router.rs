use super::{handlers, state::AppState};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/chat", post(handlers::chat_handler))
        .route("/chat/history", get(handlers::chat_history_handler))
        .route("/session/reset", post(handlers::reset_session_handler))
        .route(
            "/document",
            post(handlers::upload_document_handler).layer(DefaultBodyLimit::max(10 * 1024 * 1024)),
        )
        .route("/convert", post(handlers::convert_handler))
        .route("/draft", post(handlers::draft_handler))
        .route("/draft/download", get(handlers::download_draft_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
