//! # Application State
//!
//! The shared application state (`AppState`) and the logic for building it at
//! startup: the loaded configuration, the instantiated completion provider,
//! the prompt assembler, and the in-memory session store.

use crate::config::AppConfig;
use nyaya::{
    providers::ai::{groq::GroqProvider, AiProvider},
    ChatSession, PromptAssembler,
};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
    time::Duration,
};
use tracing::warn;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml` and the
    /// environment.
    pub config: Arc<AppConfig>,
    /// The completion client used by every mode.
    pub ai_provider: Arc<dyn AiProvider>,
    /// Deterministic message-list construction, parameterized by the
    /// configured context limit and history window.
    pub assembler: PromptAssembler,
    /// Per-session state, keyed by the client-supplied session id. Sessions
    /// live for the life of the process; there is no cross-restart
    /// persistence.
    pub sessions: Arc<RwLock<HashMap<String, ChatSession>>>,
}

/// Builds the shared application state from the configuration.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    if config
        .api_key
        .as_deref()
        .map_or(true, |k| k.trim().is_empty())
    {
        warn!("No completion API key configured; completion calls will fail until GROQ_API_KEY is set.");
    }

    let ai_provider: Arc<dyn AiProvider> = Arc::new(GroqProvider::new(
        config.api_url.clone(),
        config.api_key.clone(),
        config.model_name.clone(),
        config.temperature,
        Duration::from_secs(config.request_timeout_secs),
    )?);

    let assembler = PromptAssembler::new(config.context_limit, config.history_window);

    Ok(AppState {
        config: Arc::new(config),
        ai_provider,
        assembler,
        sessions: Arc::new(RwLock::new(HashMap::new())),
    })
}
