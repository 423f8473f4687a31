//! # Session Lifecycle Handler
//!
//! Explicit reset of a session: clears the transcript, the document context,
//! and any remembered draft.

use super::{wrap_response, ApiResponse, AppError, AppState, DebugParams};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Deserialize, Debug)]
pub struct ResetRequest {
    pub session_id: String,
}

#[derive(Serialize, Deserialize)]
pub struct ResetResponse {
    pub message: String,
}

/// The handler for the `/session/reset` endpoint.
pub async fn reset_session_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<ResetRequest>,
) -> Result<Json<ApiResponse<ResetResponse>>, AppError> {
    let existed = {
        let mut sessions = app_state.sessions.write().map_err(|_| {
            AppError::Internal(anyhow::anyhow!("Failed to acquire session store lock"))
        })?;
        sessions.remove(&payload.session_id).is_some()
    };
    info!(session_id = %payload.session_id, existed, "Session reset.");

    Ok(wrap_response(
        ResetResponse {
            message: "Session cleared.".to_string(),
        },
        debug_params,
        None,
    ))
}
