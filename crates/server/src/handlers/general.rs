//! # General Route Handlers
//!
//! The browser-facing index page and the health check.

use axum::response::Html;
use serde::{Deserialize, Serialize};

// --- Shared API Payloads ---

/// The response body shared by the single-shot generation endpoints.
#[derive(Serialize, Deserialize)]
pub struct PromptResponse {
    pub text: String,
}

// --- General-Purpose Handlers ---

/// The handler for the root (`/`) endpoint: the single-page UI.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
