//! # Assistant application
//!
//! Wires the context client, prompt assembly, and LLM client into the
//! dashboard assistant's answer flow. Loads config from env; owns the error
//! type and tracing setup for the binaries.

pub mod config;
pub mod error;
pub mod logger;
pub mod service;

pub use config::AssistantConfig;
pub use error::AssistantError;
pub use logger::init_tracing;
pub use service::AssistantService;
