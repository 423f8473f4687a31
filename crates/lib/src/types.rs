use serde::{Deserialize, Serialize};

/// The role of a message in a conversation, as understood by the
/// chat-completion wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged message, both in session transcripts and in the
/// request body sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Selects which generation of Indian criminal law the assistant answers
/// under: the 2023 codes (BNS/BNSS/BSA) or the pre-2023 ones (IPC/CrPC/IEA).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    New,
    Legacy,
}

/// The form fields of a document drafting request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftDetails {
    pub draft_type: String,
    pub jurisdiction: String,
    pub party_one: String,
    pub party_two: String,
    pub key_terms: String,
}
