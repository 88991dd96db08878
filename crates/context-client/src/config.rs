//! Context store client config: base URL and request timeout. Loaded from env.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Default per-request timeout in seconds. Each call gets a single attempt
/// bounded by this; a timed-out call is treated as a plain failure.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Config for [`crate::ContextClient`]: where the context store lives and how
/// long to wait for it. This is the only process-wide state the client holds.
#[derive(Debug, Clone)]
pub struct ContextClientConfig {
    /// Store base URL without trailing slash, e.g. `https://dash.example.com`.
    pub base_url: String,
    /// Per-request timeout applied to every call.
    pub timeout: Duration,
}

impl ContextClientConfig {
    /// Builds a config with the default timeout. Trailing slashes on
    /// `base_url` are stripped so endpoint paths can be appended directly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from environment variables: `CONTEXT_API_BASE_URL` (required),
    /// `CONTEXT_TIMEOUT_SECS` (optional, default 10).
    pub fn from_env() -> Result<Self> {
        let base_url =
            env::var("CONTEXT_API_BASE_URL").context("CONTEXT_API_BASE_URL not set")?;
        let timeout_secs = env::var("CONTEXT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Ok(Self::new(base_url).with_timeout(Duration::from_secs(timeout_secs)))
    }

    /// Validate config (base_url must be a valid URL).
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.base_url).is_err() {
            anyhow::bail!(
                "CONTEXT_API_BASE_URL is not a valid URL: {}",
                self.base_url
            );
        }
        Ok(())
    }
}
