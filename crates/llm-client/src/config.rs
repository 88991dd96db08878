//! LLM provider config loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// OpenAI-compatible provider config.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// OPENAI_API_KEY
    pub api_key: String,
    /// OPENAI_BASE_URL; default is the public OpenAI endpoint.
    pub base_url: String,
    /// MODEL
    pub model: String,
    /// USE_STREAMING: stream deltas instead of waiting for the full reply.
    pub use_streaming: bool,
}

impl LlmConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let use_streaming = env::var("USE_STREAMING")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(false);
        Ok(Self {
            api_key,
            base_url,
            model,
            use_streaming,
        })
    }
}
