//! # Chat Handlers
//!
//! The free-form legal assistant: each turn commits the user message to the
//! session transcript, assembles the upstream message list (system prompt,
//! optional document context, windowed history), calls the completion
//! service, and commits the assistant reply.

use super::{
    wrap_response, with_session, ApiResponse, AppError, AppState, DebugParams, SessionParams,
};
use axum::{
    extract::{Query, State},
    Json,
};
use nyaya::{ChatMessage, Mode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

// --- API Payloads ---

#[derive(Deserialize, Debug)]
pub struct ChatRequest {
    pub session_id: String,
    pub prompt: String,
    #[serde(default)]
    pub mode: Mode,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

// --- Handlers ---

/// The handler for the `/chat` endpoint.
///
/// The user turn is appended before the upstream call, so a failed call
/// leaves the question in the transcript. The session lock is never held
/// across the network call.
pub async fn chat_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ApiResponse<ChatResponse>>, AppError> {
    if payload.prompt.trim().is_empty() {
        return Err(AppError::Validation("Prompt must not be empty.".to_string()));
    }
    info!(session_id = %payload.session_id, "Received chat prompt.");

    let messages = with_session(&app_state, &payload.session_id, |session| {
        session.push_user(&payload.prompt);
        app_state
            .assembler
            .assemble_chat(payload.mode, session.document.as_ref(), &session.history)
    })?;

    let reply = app_state.ai_provider.complete(&messages).await?;

    with_session(&app_state, &payload.session_id, |session| {
        session.push_assistant(&reply);
    })?;

    let debug_info = json!({
        "mode": payload.mode,
        "messages_sent": messages.len(),
    });
    Ok(wrap_response(
        ChatResponse { reply },
        debug_params,
        Some(debug_info),
    ))
}

/// The handler for the `/chat/history` endpoint.
///
/// A session that has not been seen yet has an empty transcript.
pub async fn chat_history_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Query(params): Query<SessionParams>,
) -> Result<Json<ApiResponse<Vec<ChatMessage>>>, AppError> {
    let history = {
        let sessions = app_state.sessions.read().map_err(|_| {
            AppError::Internal(anyhow::anyhow!("Failed to acquire session store lock"))
        })?;
        sessions
            .get(&params.session_id)
            .map(|s| s.history.clone())
            .unwrap_or_default()
    };

    Ok(wrap_response(history, debug_params, None))
}
