//! # Context client
//!
//! HTTP client for the remote context store that caches the business corpus
//! grounding assistant answers. Exposes the freshness coordination used
//! before each assistant invocation:
//!
//! - [`ContextClient::ensure_fresh_context`] — best-effort staleness check
//!   plus refresh; never fails from the caller's perspective.
//! - [`ContextClient::get_system_prompt`] — live system prompt, or the
//!   hardcoded fallback persona when the store is unreachable.
//!
//! Low-level calls ([`ContextClient::fetch_stats`], [`ContextClient::refresh`],
//! [`ContextClient::fetch_document`], [`ContextClient::fetch_prompt`]) return
//! explicit results for callers that need to inspect outcomes (CLI, contract
//! verification).
//!
//! ## External interactions
//!
//! - **Context store**: GET `/api/context/stats`, POST `/api/context/refresh`,
//!   GET `/api/context`, GET `/api/context/prompt`. The store serializes
//!   refreshes internally; refresh is idempotent, so concurrent callers are
//!   not de-duplicated here.

mod client;
mod config;
mod contract;
mod error;
mod types;

pub use client::{ContextClient, FALLBACK_SYSTEM_PROMPT};
pub use config::{ContextClientConfig, DEFAULT_TIMEOUT_SECS};
pub use contract::{ContractCheck, ContractReport, MIN_CONTEXT_BYTES, PROMPT_MARKER};
pub use error::ContextClientError;
pub use types::{ContextDocument, ContextRefreshResult, ContextStats};
