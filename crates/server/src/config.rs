//! # Application Configuration
//!
//! Defines the configuration structure for `nyaya-server` and the logic for
//! loading it from an optional `config.yml` and environment variables. The
//! completion API key is never compiled in: it reaches the process through
//! `GROQ_API_KEY`, a `NYAYA_`-prefixed override, or `${VAR}` substitution in
//! the config file.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The chat-completions endpoint of the hosted completion service.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// The bearer key for the completion service. Loaded from `GROQ_API_KEY`
    /// when not set by the config file.
    #[serde(default)]
    pub api_key: Option<String>,
    /// The model identifier sent with every completion request.
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// The sampling temperature sent with every completion request.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum characters of document context forwarded per request.
    #[serde(default = "default_context_limit")]
    pub context_limit: usize,
    /// Maximum number of history turns forwarded per request.
    #[serde(default = "default_history_window")]
    pub history_window: usize,
    /// Outbound request timeout, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_port() -> u16 {
    9090
}

fn default_api_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model_name() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_context_limit() -> usize {
    20_000
}

fn default_history_window() -> usize {
    40
}

fn default_request_timeout_secs() -> u64 {
    120
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}").map_err(|e| {
        ConfigError::General(format!("Invalid substitution pattern: {e}"))
    })?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|_| "".to_string())
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// Configuration is layered: built-in defaults, then an optional `config.yml`
/// (with `${ENV_VAR}` substitution), then environment variables.
/// - Top-level keys like `port` are overridden by `PORT`.
/// - Nested keys are overridden by `NYAYA_...` variables (e.g.,
///   `NYAYA_MODEL_NAME`).
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    let config_path = match config_path_override {
        Some(path) => path.to_string(),
        None => format!("{}/config.yml", env!("CARGO_MANIFEST_DIR")),
    };

    match read_and_substitute(&config_path)? {
        Some(content) => {
            info!("Loading configuration from '{config_path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None => {
            if config_path_override.is_some() {
                return Err(ConfigError::NotFound(format!(
                    "Config file not found at '{config_path}'."
                )));
            }
            info!("No '{config_path}' found; using built-in defaults.");
        }
    }

    let settings = builder
        // Load environment variables for top-level keys like PORT.
        .add_source(Environment::default())
        // Load prefixed environment variables for deeper overrides.
        .add_source(
            Environment::with_prefix("NYAYA")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // After all layers, explicitly check for GROQ_API_KEY from the
    // environment if the file did not set a key. This makes loading the key
    // robust for the common deployment shape (key only in the environment).
    if config.api_key.is_none() {
        if let Ok(key) = env::var("GROQ_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
    }

    Ok(config)
}
