//! Error type for context store calls.
//!
//! [`ContextClientError`] is returned by the low-level fetch/refresh calls.
//! It never crosses `ensure_fresh_context` or `get_system_prompt`: those
//! fold every failure into their documented fallback behavior.

use thiserror::Error;

/// Errors from a single context store call (transport, status, config).
///
/// Malformed JSON surfaces as [`ContextClientError::Http`] since reqwest's
/// body decoding reports it as a request error; the coordinator treats it the
/// same as any other failure.
#[derive(Error, Debug)]
pub enum ContextClientError {
    #[error("Context store request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Context store returned status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("Context client config error: {0}")]
    Config(String),
}
