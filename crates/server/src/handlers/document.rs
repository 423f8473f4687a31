//! # Document Upload Handler
//!
//! Accepts a PDF upload, extracts its text, and installs it as the session's
//! document context. A new upload replaces any previous context wholesale.

use super::{wrap_response, with_session, ApiResponse, AppError, AppState, DebugParams};
use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::Multipart;
use nyaya::DocumentContext;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

#[derive(Serialize, Deserialize)]
pub struct DocumentResponse {
    pub source: String,
    pub extracted_chars: usize,
}

/// The handler for the `/document` endpoint (multipart upload).
///
/// Expects a `session_id` text part and a `file` part holding the PDF bytes.
pub async fn upload_document_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<DocumentResponse>>, AppError> {
    let mut session_id: Option<String> = None;
    let mut file_name: Option<String> = None;
    let mut pdf_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(anyhow::Error::from)? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "session_id" => {
                session_id = Some(field.text().await.map_err(anyhow::Error::from)?);
            }
            "file" => {
                file_name = Some(field.file_name().unwrap_or("uploaded_file.pdf").to_string());
                pdf_data = Some(field.bytes().await.map_err(anyhow::Error::from)?.to_vec());
            }
            _ => warn!("Ignoring unknown multipart field: {}", name),
        }
    }

    let session_id = session_id
        .ok_or_else(|| AppError::Validation("Missing 'session_id' part.".to_string()))?;
    let file_name =
        file_name.ok_or_else(|| AppError::Validation("Missing 'file' part.".to_string()))?;
    let pdf_data =
        pdf_data.ok_or_else(|| AppError::Validation("Missing 'file' part.".to_string()))?;

    info!(
        session_id = %session_id,
        "Received document upload '{}' ({} bytes).",
        file_name,
        pdf_data.len()
    );

    let text = nyaya_pdf::extract_text(&pdf_data)?;
    let extracted_chars = text.chars().count();
    info!("Extracted {extracted_chars} characters from '{file_name}'.");

    with_session(&app_state, &session_id, |session| {
        session.set_document(DocumentContext {
            source: file_name.clone(),
            text,
        });
    })?;

    let debug_info = json!({
        "session_id": session_id,
        "upload_bytes": pdf_data.len(),
    });
    Ok(wrap_response(
        DocumentResponse {
            source: file_name,
            extracted_chars,
        },
        debug_params,
        Some(debug_info),
    ))
}
