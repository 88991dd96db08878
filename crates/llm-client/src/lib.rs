//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an OpenAI-compatible implementation.
//! Transport-agnostic; the assistant service composes it with the context
//! client's system prompt.
//!
//! Unlike the context side, provider failures DO propagate: the generative
//! call is the product, not advisory coordination.
//!
//! The stream method uses a boxed callback so that [`LlmClient`] is object-safe.

use anyhow::Result;
use async_trait::async_trait;
use prompt::ChatMessage;
use std::future::Future;
use std::pin::Pin;

mod config;
mod openai;

pub use config::LlmConfig;
pub use openai::OpenAiLlmClient;

/// A chunk of streamed LLM output.
#[derive(Debug, Clone)]
pub struct StreamChunk {
    pub content: String,
    pub done: bool,
}

/// Type-erased callback for stream chunks so that [`LlmClient`] is dyn compatible.
pub type StreamChunkCallback =
    dyn FnMut(StreamChunk) -> Pin<Box<dyn Future<Output = Result<()>> + Send>> + Send;

/// LLM client interface: request completion or streamed completion from a
/// list of role-tagged messages. Implementations forward the sequence as-is;
/// the system message is the caller's responsibility (see `prompt`).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String>;

    /// Streamed completion: invokes `callback` per delta and returns the
    /// full reply text. Boxed callback for object safety (dyn LlmClient).
    async fn complete_stream(
        &self,
        messages: Vec<ChatMessage>,
        callback: &mut StreamChunkCallback,
    ) -> Result<String>;
}

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head_len = 7.min(len);
        let tail_len = 4.min(len.saturating_sub(head_len));
        let head = &token[..head_len];
        let tail = if tail_len > 0 {
            &token[len - tail_len..]
        } else {
            ""
        };
        format!("{}***{}", head, tail)
    }
}
