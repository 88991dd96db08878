//! Store contract verification: the four-endpoint checklist run by
//! `fd-assistant context verify`.
//!
//! Mirrors what an operator checks by hand after deploying the store: the
//! refresh endpoint rebuilds a corpus of credible size, stats report data
//! present and fresh, the document body is non-trivial, and the prompt
//! carries its marker.

use crate::client::ContextClient;

/// A rebuilt corpus or document below this many bytes is considered a broken
/// build (empty shell pages, auth redirects, error bodies).
pub const MIN_CONTEXT_BYTES: usize = 2000;

/// Substring the live system prompt must carry; its absence means the store
/// served something other than the assembled prompt.
pub const PROMPT_MARKER: &str = "CONTEXTO";

/// Outcome of a single contract check.
#[derive(Debug, Clone)]
pub struct ContractCheck {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl ContractCheck {
    fn pass(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            passed: true,
            detail: detail.into(),
        }
    }

    fn fail(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            passed: false,
            detail: detail.into(),
        }
    }
}

/// Result of a full contract verification run.
#[derive(Debug, Clone)]
pub struct ContractReport {
    pub checks: Vec<ContractCheck>,
}

impl ContractReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}

impl ContextClient {
    /// Runs the full store contract checklist and reports each check.
    ///
    /// Refresh runs first so the remaining checks see a freshly built
    /// corpus. Unlike the answer path, failures here are reported, not
    /// swallowed.
    pub async fn verify_contract(&self) -> ContractReport {
        let mut checks = Vec::new();

        match self.refresh().await {
            Ok(result) if result.ok && result.size as usize > MIN_CONTEXT_BYTES => {
                checks.push(ContractCheck::pass(
                    "refresh",
                    format!("ok, rebuilt {} bytes", result.size),
                ));
            }
            Ok(result) => {
                checks.push(ContractCheck::fail(
                    "refresh",
                    format!(
                        "ok={}, size={} (expected ok with size > {})",
                        result.ok, result.size, MIN_CONTEXT_BYTES
                    ),
                ));
            }
            Err(err) => {
                checks.push(ContractCheck::fail("refresh", err.to_string()));
            }
        }

        match self.fetch_stats().await {
            Ok(stats) if stats.has_data && !stats.stale => {
                checks.push(ContractCheck::pass(
                    "stats",
                    "store has data and reports fresh",
                ));
            }
            Ok(stats) => {
                checks.push(ContractCheck::fail(
                    "stats",
                    format!(
                        "hasData={}, stale={} (expected data present and fresh)",
                        stats.has_data, stats.stale
                    ),
                ));
            }
            Err(err) => {
                checks.push(ContractCheck::fail("stats", err.to_string()));
            }
        }

        match self.fetch_document().await {
            Ok(doc) if doc.md.len() > MIN_CONTEXT_BYTES => {
                checks.push(ContractCheck::pass(
                    "document",
                    format!("{} bytes of markdown", doc.md.len()),
                ));
            }
            Ok(doc) => {
                checks.push(ContractCheck::fail(
                    "document",
                    format!(
                        "{} bytes of markdown (expected > {})",
                        doc.md.len(),
                        MIN_CONTEXT_BYTES
                    ),
                ));
            }
            Err(err) => {
                checks.push(ContractCheck::fail("document", err.to_string()));
            }
        }

        match self.fetch_prompt().await {
            Ok(text) if text.contains(PROMPT_MARKER) => {
                checks.push(ContractCheck::pass(
                    "prompt",
                    format!("{} chars, marker present", text.chars().count()),
                ));
            }
            Ok(_) => {
                checks.push(ContractCheck::fail(
                    "prompt",
                    format!("marker {:?} missing from prompt body", PROMPT_MARKER),
                ));
            }
            Err(err) => {
                checks.push(ContractCheck::fail("prompt", err.to_string()));
            }
        }

        ContractReport { checks }
    }
}
