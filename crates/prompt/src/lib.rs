//! # Prompt
//!
//! Role-tagged chat messages and the assembly step that turns a user
//! history plus a system prompt into a provider-ready message sequence.
//!
//! ## Usage
//!
//! The assistant service fetches a system prompt (live or fallback) and
//! calls [`with_system_prompt`] to prepend it to the conversation history
//! before forwarding to the LLM client.
//!
//! ## External interactions
//!
//! - **AI models**: Output is sent to OpenAI-compatible chat APIs.

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    /// API wire value for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single chat message, one-to-one with one element of the API `messages` array.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    /// One-line rendering `role: content` for logs and transcripts.
    pub fn transcript_line(&self) -> String {
        format!("{}: {}", self.role.as_str(), self.content)
    }
}

/// Prepends exactly one system message to `history`.
///
/// Any system entries already present in `history` are dropped: the composed
/// sequence carries a single source of truth for the persona, and that is the
/// prompt obtained from the context store (or its fallback).
///
/// # Arguments
///
/// * `system` - System prompt text to place at the head of the sequence
/// * `history` - Ordered user/assistant conversation so far
///
/// # Returns
///
/// Messages ready for an OpenAI-compatible chat API: one system message
/// followed by `history` in its original order, minus stray system entries.
pub fn with_system_prompt(
    system: impl Into<String>,
    history: impl IntoIterator<Item = ChatMessage>,
) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(system)];
    messages.extend(
        history
            .into_iter()
            .filter(|m| m.role != MessageRole::System),
    );
    messages
}
