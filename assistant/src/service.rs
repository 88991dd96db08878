//! Answer flow: freshness check, system prompt, LLM completion.

use std::sync::Arc;

use tracing::{info, instrument};

use context_client::ContextClient;
use llm_client::{LlmClient, OpenAiLlmClient, StreamChunkCallback};
use prompt::{with_system_prompt, ChatMessage};

use crate::config::AssistantConfig;
use crate::error::{AssistantError, Result};

/// The assistant service: composes the context client and an LLM client.
///
/// Policy: freshness is checked before every answer. The two context
/// primitives stay separate operations, so [`AssistantService::answer_quick`]
/// can skip the check when latency matters more than accuracy.
#[derive(Clone)]
pub struct AssistantService {
    context: ContextClient,
    llm: Arc<dyn LlmClient>,
}

impl AssistantService {
    pub fn new(context: ContextClient, llm: Arc<dyn LlmClient>) -> Self {
        Self { context, llm }
    }

    /// Builds the service from config with the OpenAI-backed client.
    pub fn from_config(config: &AssistantConfig) -> Result<Self> {
        let context = ContextClient::new(config.context.clone())?;
        let llm = Arc::new(OpenAiLlmClient::from_config(&config.llm));
        Ok(Self::new(context, llm))
    }

    /// Access to the underlying context client (CLI store commands).
    pub fn context(&self) -> &ContextClient {
        &self.context
    }

    /// Answers `history` with a freshness check first.
    ///
    /// The context steps never fail (worst case: fallback persona); provider
    /// errors propagate.
    #[instrument(skip(self, history))]
    pub async fn answer(&self, history: Vec<ChatMessage>) -> Result<String> {
        self.context.ensure_fresh_context().await;
        self.answer_quick(history).await
    }

    /// Answers `history` without the freshness check (latency over accuracy).
    #[instrument(skip(self, history))]
    pub async fn answer_quick(&self, history: Vec<ChatMessage>) -> Result<String> {
        let system = self.context.get_system_prompt().await;
        let messages = with_system_prompt(system, history);
        info!(message_count = messages.len(), "requesting completion");
        self.llm
            .complete(messages)
            .await
            .map_err(AssistantError::Provider)
    }

    /// Streamed variant of [`AssistantService::answer`]; invokes `callback`
    /// per delta and returns the full reply text.
    #[instrument(skip(self, history, callback))]
    pub async fn answer_stream(
        &self,
        history: Vec<ChatMessage>,
        callback: &mut StreamChunkCallback,
    ) -> Result<String> {
        self.context.ensure_fresh_context().await;
        let system = self.context.get_system_prompt().await;
        let messages = with_system_prompt(system, history);
        info!(message_count = messages.len(), "requesting streamed completion");
        self.llm
            .complete_stream(messages, callback)
            .await
            .map_err(AssistantError::Provider)
    }
}
