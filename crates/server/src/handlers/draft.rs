//! # Document Drafter Handlers
//!
//! Single-shot generation of a legal document first draft from form fields.
//! The generated draft is remembered on the session so it can be served as a
//! plain-text download.

use super::{
    wrap_response, with_session, ApiResponse, AppError, AppState, DebugParams, PromptResponse,
    SessionParams,
};
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use nyaya::{DraftDetails, DraftRecord, PromptAssembler};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

#[derive(Deserialize, Debug)]
pub struct DraftRequest {
    pub session_id: String,
    pub draft_type: String,
    #[serde(default)]
    pub jurisdiction: String,
    pub party_one: String,
    pub party_two: String,
    pub key_terms: String,
}

/// The handler for the `/draft` endpoint.
pub async fn draft_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<DraftRequest>,
) -> Result<Json<ApiResponse<PromptResponse>>, AppError> {
    if payload.draft_type.trim().is_empty() {
        return Err(AppError::Validation(
            "Document type must not be empty.".to_string(),
        ));
    }
    if payload.party_one.trim().is_empty()
        || payload.party_two.trim().is_empty()
        || payload.key_terms.trim().is_empty()
    {
        return Err(AppError::Validation(
            "Please fill in the party names and key terms.".to_string(),
        ));
    }
    info!(
        session_id = %payload.session_id,
        "Received drafting request for a {}.",
        payload.draft_type
    );

    let details = DraftDetails {
        draft_type: payload.draft_type.clone(),
        jurisdiction: payload.jurisdiction.clone(),
        party_one: payload.party_one.clone(),
        party_two: payload.party_two.clone(),
        key_terms: payload.key_terms.clone(),
    };
    let messages = PromptAssembler::drafter_request(&details);
    let text = app_state.ai_provider.complete(&messages).await?;

    let draft = DraftRecord {
        draft_type: payload.draft_type.clone(),
        text: text.clone(),
    };
    let file_name = draft.file_name();
    with_session(&app_state, &payload.session_id, |session| {
        session.set_draft(draft);
    })?;

    let debug_info = json!({
        "draft_type": payload.draft_type,
        "file_name": file_name,
    });
    Ok(wrap_response(
        PromptResponse { text },
        debug_params,
        Some(debug_info),
    ))
}

/// The handler for the `/draft/download` endpoint.
///
/// Serves the session's most recent draft as a plain-text attachment named
/// after the document type.
pub async fn download_draft_handler(
    State(app_state): State<AppState>,
    Query(params): Query<SessionParams>,
) -> Result<Response, AppError> {
    let draft = {
        let sessions = app_state.sessions.read().map_err(|_| {
            AppError::Internal(anyhow::anyhow!("Failed to acquire session store lock"))
        })?;
        sessions
            .get(&params.session_id)
            .and_then(|s| s.last_draft.clone())
    }
    .ok_or_else(|| {
        AppError::NotFound("No draft has been generated for this session.".to_string())
    })?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/plain; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", draft.file_name()),
        ),
    ];
    Ok((headers, draft.text).into_response())
}
