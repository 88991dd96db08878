//! OpenAI-compatible [`LlmClient`] implementation over async-openai.

use std::sync::Arc;

use anyhow::Result;
use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use futures::StreamExt;
use prompt::{ChatMessage, MessageRole};
use tracing::instrument;

use super::{mask_token, LlmClient, LlmConfig, StreamChunk, StreamChunkCallback};

/// Chat client for OpenAI-compatible endpoints.
#[derive(Clone)]
pub struct OpenAiLlmClient {
    /// Shared async-openai client used for all API calls.
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    model: String,
    /// API key stored only for masked logging.
    api_key_for_logging: String,
}

impl OpenAiLlmClient {
    pub fn new(api_key: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new().with_api_key(api_key.clone());
        Self {
            client: Arc::new(Client::with_config(config)),
            model: "gpt-4o-mini".to_string(),
            api_key_for_logging: api_key,
        }
    }

    /// Builds a client with a custom base URL (proxies, compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            model: "gpt-4o-mini".to_string(),
            api_key_for_logging: api_key,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::with_base_url(config.api_key.clone(), config.base_url.clone())
            .with_model(config.model.clone())
    }

    fn build_request(
        &self,
        messages: &[ChatMessage],
    ) -> Result<async_openai::types::CreateChatCompletionRequest> {
        let mut openai_messages: Vec<ChatCompletionRequestMessage> =
            Vec::with_capacity(messages.len());
        for msg in messages {
            openai_messages.push(chat_message_to_openai(msg)?);
        }
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(openai_messages)
            .build()?;
        Ok(request)
    }

    fn log_request(&self, kind: &str, message_count: usize) {
        tracing::info!(
            model = %self.model,
            message_count = message_count,
            api_key = %mask_token(&self.api_key_for_logging),
            "OpenAI {} request",
            kind
        );
    }
}

#[async_trait]
impl LlmClient for OpenAiLlmClient {
    #[instrument(skip(self, messages))]
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        self.log_request("completion", messages.len());
        let request = self.build_request(&messages)?;

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI completion usage"
            );
        }

        if let Some(choice) = response.choices.first() {
            Ok(choice.message.content.clone().unwrap_or_default())
        } else {
            anyhow::bail!("No response from OpenAI")
        }
    }

    #[instrument(skip(self, messages, callback))]
    async fn complete_stream(
        &self,
        messages: Vec<ChatMessage>,
        callback: &mut StreamChunkCallback,
    ) -> Result<String> {
        self.log_request("stream", messages.len());
        let request = self.build_request(&messages)?;

        let mut stream = self.client.chat().create_stream(request).await?;

        let mut full_response = String::new();
        while let Some(result) = stream.next().await {
            let chunk = result?;
            if let Some(ref u) = chunk.usage {
                tracing::info!(
                    prompt_tokens = u.prompt_tokens,
                    completion_tokens = u.completion_tokens,
                    total_tokens = u.total_tokens,
                    "OpenAI stream usage"
                );
            }
            if let Some(choice) = chunk.choices.first() {
                let done = choice.finish_reason.is_some();
                if let Some(content) = &choice.delta.content {
                    full_response.push_str(content);
                    callback(StreamChunk {
                        content: content.clone(),
                        done,
                    })
                    .await?;
                } else if done {
                    callback(StreamChunk {
                        content: String::new(),
                        done: true,
                    })
                    .await?;
                }
            }
        }

        Ok(full_response)
    }
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
