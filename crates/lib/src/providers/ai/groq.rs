use crate::{errors::CompletionError, providers::ai::AiProvider, types::ChatMessage};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Deserialize, Debug)]
struct ChatCompletionMessage {
    content: String,
}

// --- Groq Provider implementation ---

/// A provider for the Groq chat-completions API, or any other
/// OpenAI-compatible endpoint.
///
/// One synchronous request per call: no retries, no backoff. The only
/// defense against a hung upstream is the client-level request timeout.
#[derive(Clone, Debug)]
pub struct GroqProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
}

impl GroqProvider {
    /// Creates a new `GroqProvider`.
    ///
    /// A missing or empty `api_key` is accepted here; the key is checked at
    /// call time so a misconfigured server still starts and reports the
    /// problem on first use.
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        model: String,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(CompletionError::ClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
            temperature,
        })
    }
}

#[async_trait]
impl AiProvider for GroqProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError> {
        let api_key = match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(CompletionError::MissingApiKey),
        };

        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(CompletionError::Request)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api(error_text));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(CompletionError::Deserialization)?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(CompletionError::EmptyResponse)
    }
}
