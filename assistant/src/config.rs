//! Application config: context store, LLM provider, logging. Loaded from env.

use anyhow::Result;
use std::env;

use context_client::ContextClientConfig;
use llm_client::LlmConfig;

/// Full assistant config, aggregated from the per-concern env loaders.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub context: ContextClientConfig,
    pub llm: LlmConfig,
    /// Log file path
    pub log_file: String,
}

impl AssistantConfig {
    /// Load from environment variables. Call `dotenvy::dotenv()` first in
    /// binaries so a local `.env` is honored.
    pub fn load() -> Result<Self> {
        let context = ContextClientConfig::from_env()?;
        let llm = LlmConfig::from_env()?;
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/assistant.log".to_string());
        Ok(Self {
            context,
            llm,
            log_file,
        })
    }

    /// Validate config (context base URL must be a valid URL).
    pub fn validate(&self) -> Result<()> {
        self.context.validate()
    }
}
