//! # Session State
//!
//! The explicit per-session object owning the chat transcript, the active
//! document context, and the most recently generated draft. A session is
//! created on first use, mutated only through its methods, and dropped on
//! explicit reset.

use crate::types::ChatMessage;
use serde::{Deserialize, Serialize};

/// Text extracted from the most recently uploaded reference document.
///
/// The full extracted text is stored; truncation to the configured character
/// limit happens only when the context is placed into a prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentContext {
    /// The uploaded file's name, kept for display.
    pub source: String,
    pub text: String,
}

impl DocumentContext {
    /// Returns at most `limit` characters of the extracted text.
    ///
    /// A hard character cutoff, not sentence-aware: the result is always a
    /// prefix of the full text and has exactly `limit` chars when the text
    /// is longer than that.
    pub fn truncated(&self, limit: usize) -> &str {
        match self.text.char_indices().nth(limit) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}

/// The most recently generated document draft, kept so it can be offered as
/// a download after the drafting call returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftRecord {
    pub draft_type: String,
    pub text: String,
}

impl DraftRecord {
    /// The attachment name the draft is served under.
    pub fn file_name(&self) -> String {
        format!("{}_Draft.txt", self.draft_type)
    }
}

/// All state owned by one user session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatSession {
    /// Conversation turns in chronological order, append-only.
    pub history: Vec<ChatMessage>,
    /// At most one document context is active at a time; a new upload
    /// replaces the previous one wholesale.
    pub document: Option<DocumentContext>,
    pub last_draft: Option<DraftRecord>,
}

impl ChatSession {
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.history.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.history.push(ChatMessage::assistant(content));
    }

    pub fn set_document(&mut self, document: DocumentContext) {
        self.document = Some(document);
    }

    pub fn set_draft(&mut self, draft: DraftRecord) {
        self.last_draft = Some(draft);
    }
}
