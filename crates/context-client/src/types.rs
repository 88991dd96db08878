//! Wire types for the context store API (camelCase JSON on the wire).

use serde::Deserialize;

/// Staleness report from `GET /api/context/stats`.
///
/// Fetched fresh on every freshness check and never cached locally; the
/// store owns the staleness decision, this side only reads it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextStats {
    /// Whether the store holds any cached corpus at all.
    pub has_data: bool,
    /// True when the cached corpus should be refreshed before being trusted.
    pub stale: bool,
    /// Per-source detail (Google Business, Cal.com, site content, ...).
    /// Shape varies by source; kept opaque.
    #[serde(default)]
    pub sources: serde_json::Value,
}

/// Result of `POST /api/context/refresh`. Confirm-and-discard: inspected for
/// logging, never stored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextRefreshResult {
    pub ok: bool,
    /// Size in bytes of the rebuilt corpus.
    #[serde(default)]
    pub size: u64,
}

/// Full cached corpus from `GET /api/context`. Consumed only by contract
/// verification; the answer path never needs the raw document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextDocument {
    /// The markdown corpus of business facts.
    pub md: String,
    /// Build metadata (timestamps, source versions). Kept opaque.
    #[serde(default)]
    pub meta: serde_json::Value,
}
