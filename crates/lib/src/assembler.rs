//! # Prompt Assembly
//!
//! Deterministic construction of the message lists sent to the completion
//! service. The chat mode gets one system message, an optional truncated
//! document-context system message, and the windowed conversation history;
//! the converter and drafter modes each get a single templated user message.

use crate::{
    prompts,
    session::DocumentContext,
    types::{ChatMessage, DraftDetails, Mode},
};

/// Builds completion request message lists from session state.
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    /// Maximum characters of document context forwarded per request.
    context_limit: usize,
    /// Maximum number of history turns forwarded per request. The full
    /// transcript stays in the session; only the upstream request is
    /// windowed.
    history_window: usize,
}

impl PromptAssembler {
    pub fn new(context_limit: usize, history_window: usize) -> Self {
        Self {
            context_limit,
            history_window,
        }
    }

    /// Assembles the message list for a chat turn.
    ///
    /// The result is, in order: the mode's system prompt, one document
    /// context system message when a non-empty context is present, then the
    /// last `history_window` turns of `history`. History order is never
    /// changed.
    pub fn assemble_chat(
        &self,
        mode: Mode,
        document: Option<&DocumentContext>,
        history: &[ChatMessage],
    ) -> Vec<ChatMessage> {
        let system_prompt = match mode {
            Mode::New => prompts::LEGAL_ASSISTANT_SYSTEM_PROMPT,
            Mode::Legacy => prompts::LEGAL_ASSISTANT_LEGACY_SYSTEM_PROMPT,
        };

        let mut messages = vec![ChatMessage::system(system_prompt)];

        if let Some(doc) = document {
            if !doc.text.is_empty() {
                messages.push(ChatMessage::system(prompts::fill(
                    prompts::DOCUMENT_CONTEXT_SYSTEM_PROMPT,
                    &[("context", doc.truncated(self.context_limit))],
                )));
            }
        }

        let start = history.len().saturating_sub(self.history_window);
        messages.extend_from_slice(&history[start..]);
        messages
    }

    /// Builds the single-shot request for the section converter.
    pub fn converter_request(law_code: &str, section_number: &str) -> Vec<ChatMessage> {
        vec![ChatMessage::user(prompts::fill(
            prompts::SECTION_CONVERTER_USER_PROMPT,
            &[("law_code", law_code), ("section_number", section_number)],
        ))]
    }

    /// Builds the single-shot request for the document drafter.
    pub fn drafter_request(details: &DraftDetails) -> Vec<ChatMessage> {
        vec![ChatMessage::user(prompts::fill(
            prompts::DRAFTER_USER_PROMPT,
            &[
                ("draft_type", &details.draft_type),
                ("jurisdiction", &details.jurisdiction),
                ("party_one", &details.party_one),
                ("party_two", &details.party_two),
                ("key_terms", &details.key_terms),
            ],
        ))]
    }
}
