use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nyaya::CompletionError;
use nyaya_pdf::PdfExtractError;
use serde_json::json;
use tracing::error;

/// A custom error type for the server application.
///
/// This enum encapsulates the kinds of errors that can occur within the
/// server, allowing each to be converted into an appropriate HTTP response.
/// Failures stay typed up to this boundary; only here do they become
/// user-visible messages.
pub enum AppError {
    /// Errors from the completion client.
    Completion(CompletionError),
    /// Errors from PDF text extraction.
    Pdf(PdfExtractError),
    /// Invalid request input.
    Validation(String),
    /// The requested session resource does not exist.
    NotFound(String),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        AppError::Completion(err)
    }
}

impl From<PdfExtractError> for AppError {
    fn from(err: PdfExtractError) -> Self {
        AppError::Pdf(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Completion(err) => {
                error!("CompletionError: {:?}", err);
                match err {
                    CompletionError::MissingApiKey => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Completion service API key is missing or empty.".to_string(),
                    ),
                    CompletionError::ClientBuild(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to build HTTP client: {e}"),
                    ),
                    CompletionError::Request(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Request to completion service failed: {e}"),
                    ),
                    CompletionError::Deserialization(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Failed to deserialize completion service response: {e}"),
                    ),
                    CompletionError::Api(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Completion service error: {e}"),
                    ),
                    CompletionError::EmptyResponse => (
                        StatusCode::BAD_GATEWAY,
                        "Completion service returned no choices.".to_string(),
                    ),
                }
            }
            AppError::Pdf(err) => {
                error!("PdfExtractError: {:?}", err);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("Could not read the uploaded PDF: {err}"),
                )
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
