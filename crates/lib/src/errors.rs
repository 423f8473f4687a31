use thiserror::Error;

/// Failure modes of a single chat-completion call.
///
/// Every variant is surfaced to callers as a typed error rather than an
/// error string in place of content, so the HTTP layer can decide how to
/// present it without losing the distinction from real model output.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Completion service API key is missing or empty")]
    MissingApiKey,
    #[error("Request to completion service failed: {0}")]
    Request(reqwest::Error),
    #[error("Failed to deserialize completion service response: {0}")]
    Deserialization(reqwest::Error),
    #[error("Completion service returned an error: {0}")]
    Api(String),
    #[error("Completion service returned no choices")]
    EmptyResponse,
}
