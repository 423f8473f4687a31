pub mod groq;

use crate::{errors::CompletionError, types::ChatMessage};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a chat-completion provider.
///
/// This defines the single seam between prompt assembly and the hosted
/// model, so handlers and tests can swap in deterministic implementations.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends an ordered message list and returns the completion text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError>;
}

dyn_clone::clone_trait_object!(AiProvider);
