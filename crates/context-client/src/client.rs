//! Context store HTTP client and the freshness coordination built on it.

use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::ContextClientConfig;
use crate::error::ContextClientError;
use crate::types::{ContextDocument, ContextRefreshResult, ContextStats};

/// System prompt used when the live prompt cannot be retrieved. Downstream
/// checks assert the persona phrase by substring, so it must stay verbatim.
pub const FALLBACK_SYSTEM_PROMPT: &str = "Eres el asistente técnico de Fascinante Digital. \
Ayudas a clientes con marketing digital, SEO local y presencia online. \
Responde en el idioma del usuario, de forma clara y profesional.";

const STATS_PATH: &str = "/api/context/stats";
const REFRESH_PATH: &str = "/api/context/refresh";
const DOCUMENT_PATH: &str = "/api/context";
const PROMPT_PATH: &str = "/api/context/prompt";

/// Client for the remote context store.
///
/// Holds only the configured base URL and a reqwest client carrying the
/// per-request timeout; no other state survives between calls.
#[derive(Debug, Clone)]
pub struct ContextClient {
    http: Client,
    base_url: String,
}

impl ContextClient {
    /// Builds a client from config. The timeout applies to every request,
    /// including connect time and body read.
    pub fn new(config: ContextClientConfig) -> Result<Self, ContextClientError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reads the store's staleness report. One attempt, no retry.
    pub async fn fetch_stats(&self) -> Result<ContextStats, ContextClientError> {
        let resp = self.http.get(self.url(STATS_PATH)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ContextClientError::Status { status });
        }
        Ok(resp.json().await?)
    }

    /// Asks the store to rebuild the cached corpus. Idempotent on the store
    /// side; safe to issue from concurrent callers.
    pub async fn refresh(&self) -> Result<ContextRefreshResult, ContextClientError> {
        let resp = self.http.post(self.url(REFRESH_PATH)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ContextClientError::Status { status });
        }
        Ok(resp.json().await?)
    }

    /// Reads the full cached corpus. Used by contract verification and the
    /// CLI, not by the answer path.
    pub async fn fetch_document(&self) -> Result<ContextDocument, ContextClientError> {
        let resp = self.http.get(self.url(DOCUMENT_PATH)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ContextClientError::Status { status });
        }
        Ok(resp.json().await?)
    }

    /// Reads the live system prompt as plain text.
    pub async fn fetch_prompt(&self) -> Result<String, ContextClientError> {
        let resp = self.http.get(self.url(PROMPT_PATH)).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ContextClientError::Status { status });
        }
        Ok(resp.text().await?)
    }

    /// Best-effort freshness pass: read stats, and when the store reports a
    /// stale corpus, issue one refresh.
    ///
    /// Freshness is advisory, not a precondition for answering: an
    /// unreachable store, a failed stats read, or a failed refresh all end
    /// the pass silently (logged, never propagated). Exactly one attempt per
    /// call; concurrent callers are not de-duplicated because refresh is
    /// idempotent under the store contract.
    #[instrument(skip(self))]
    pub async fn ensure_fresh_context(&self) {
        let stats = match self.fetch_stats().await {
            Ok(stats) => stats,
            Err(err) => {
                debug!(error = %err, "context stats unavailable, skipping refresh");
                return;
            }
        };

        if !stats.stale {
            debug!(has_data = stats.has_data, "context is fresh");
            return;
        }

        match self.refresh().await {
            Ok(result) => {
                info!(ok = result.ok, size = result.size, "context refreshed");
            }
            Err(err) => {
                warn!(error = %err, "context refresh failed, answering with cached context");
            }
        }
    }

    /// Returns the live system prompt, or [`FALLBACK_SYSTEM_PROMPT`] when the
    /// store cannot serve one. Infallible from the caller's perspective.
    ///
    /// Callers that want a fresh, accurate prompt run
    /// [`ContextClient::ensure_fresh_context`] first; callers that care more
    /// about latency call this alone.
    #[instrument(skip(self))]
    pub async fn get_system_prompt(&self) -> String {
        match self.fetch_prompt().await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "system prompt unavailable, using fallback persona");
                FALLBACK_SYSTEM_PROMPT.to_string()
            }
        }
    }
}
