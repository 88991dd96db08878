//! Error types for the assistant application.
//!
//! [`AssistantError`] is the top-level error. Context-store failures appear
//! here only from the CLI's direct store commands; the answer path absorbs
//! them into fallbacks and never raises them.

use thiserror::Error;

use context_client::ContextClientError;

/// Top-level error for the assistant (config, context store, provider, IO).
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Context store error: {0}")]
    Context(#[from] ContextClientError),

    #[error("Provider error: {0}")]
    Provider(#[source] anyhow::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for assistant operations; uses [`AssistantError`].
pub type Result<T> = std::result::Result<T, AssistantError>;
