//! # Section Converter Handler
//!
//! Single-shot mapping of a legacy statute section (IPC/CrPC/IEA) to its
//! 2023-code equivalent. Stateless: nothing is retained between invocations.

use super::{wrap_response, ApiResponse, AppError, AppState, DebugParams, PromptResponse};
use axum::{
    extract::{Query, State},
    Json,
};
use nyaya::PromptAssembler;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

#[derive(Deserialize, Debug)]
pub struct ConvertRequest {
    pub law_code: String,
    pub section_number: String,
}

/// The handler for the `/convert` endpoint.
pub async fn convert_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<ConvertRequest>,
) -> Result<Json<ApiResponse<PromptResponse>>, AppError> {
    if payload.law_code.trim().is_empty() {
        return Err(AppError::Validation("Law code must not be empty.".to_string()));
    }
    if payload.section_number.trim().is_empty() {
        return Err(AppError::Validation(
            "Section number must not be empty.".to_string(),
        ));
    }
    info!(
        "Received conversion request for {} section {}.",
        payload.law_code, payload.section_number
    );

    let messages = PromptAssembler::converter_request(&payload.law_code, &payload.section_number);
    let text = app_state.ai_provider.complete(&messages).await?;

    let debug_info = json!({
        "law_code": payload.law_code,
        "section_number": payload.section_number,
    });
    Ok(wrap_response(
        PromptResponse { text },
        debug_params,
        Some(debug_info),
    ))
}
