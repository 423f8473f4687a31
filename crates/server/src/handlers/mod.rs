//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for `nyaya-server`. The
//! handlers are split into sub-modules per mode (chat, document upload,
//! converter, drafter, session lifecycle).

pub mod chat;
pub mod convert;
pub mod document;
pub mod draft;
pub mod general;
pub mod session;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use chat::*;
pub use convert::*;
pub use document::*;
pub use draft::*;
pub use general::*;
pub use session::*;

// Shared items used by multiple handler modules.
use super::{
    errors::AppError,
    state::AppState,
    types::{ApiResponse, DebugParams, SessionParams},
};
use axum::{extract::Query, Json};
use nyaya::ChatSession;
use serde_json::Value;

/// A shared helper function to wrap a successful result in the standard
/// `ApiResponse` format, optionally including debug information if requested.
pub(crate) fn wrap_response<T>(
    result: T,
    debug_params: Query<DebugParams>,
    debug_info: Option<Value>,
) -> Json<ApiResponse<T>> {
    let debug = if debug_params.debug.unwrap_or(false) {
        debug_info
    } else {
        None
    };
    Json(ApiResponse { debug, result })
}

/// Runs `f` with exclusive access to the session for `session_id`, creating
/// the session on first use.
pub(crate) fn with_session<R>(
    app_state: &AppState,
    session_id: &str,
    f: impl FnOnce(&mut ChatSession) -> R,
) -> Result<R, AppError> {
    let mut sessions = app_state
        .sessions
        .write()
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to acquire session store lock")))?;
    Ok(f(sessions.entry(session_id.to_string()).or_default()))
}
