//! OpenAI summarization backend.

use async_trait::async_trait;

use synopsis_core::config::BackendConfig;
use synopsis_core::error::{SynopsisError, SynopsisResult};
use synopsis_core::traits::{BackendOutput, SummaryBackend, SummaryCandidate, SummaryParams};

#[cfg(feature = "openai")]
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequest,
    },
    Client,
};

/// OpenAI chat-completions summarization backend.
pub struct OpenAiBackend {
    #[cfg(feature = "openai")]
    client: Client<OpenAIConfig>,
    config: BackendConfig,
}

impl OpenAiBackend {
    /// Create a new OpenAI backend.
    pub fn new(config: BackendConfig) -> SynopsisResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| {
                SynopsisError::Configuration(
                    "OpenAI API key not found. Set OPENAI_API_KEY or provide api_key in config."
                        .to_string(),
                )
            })?;

        #[cfg(feature = "openai")]
        let openai_config = if let Some(ref base_url) = config.base_url {
            OpenAIConfig::new()
                .with_api_key(api_key)
                .with_api_base(base_url)
        } else {
            OpenAIConfig::new().with_api_key(api_key)
        };

        #[cfg(feature = "openai")]
        let client = Client::with_config(openai_config);

        #[cfg(not(feature = "openai"))]
        let _ = api_key;

        let mut config = config;
        if config.model.is_empty() {
            config.model = "gpt-4o-mini".to_string();
        }

        Ok(Self {
            #[cfg(feature = "openai")]
            client,
            config,
        })
    }
}

#[async_trait]
impl SummaryBackend for OpenAiBackend {
    #[cfg(feature = "openai")]
    async fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> SynopsisResult<BackendOutput> {
        let (system, user) = crate::build_prompt(text, params);

        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: async_openai::types::ChatCompletionRequestSystemMessageContent::Text(
                    system,
                ),
                name: None,
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: async_openai::types::ChatCompletionRequestUserMessageContent::Text(user),
                name: None,
            }),
        ];

        let mut request = CreateChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            ..Default::default()
        };
        // Deterministic generation, output capped by the tier's upper bound
        request.temperature = Some(0.0);
        request.max_tokens = Some(params.max_length * 2);

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| SynopsisError::backend(format!("OpenAI API error: {e}")))?;

        let candidates = response
            .choices
            .into_iter()
            .filter_map(|choice| choice.message.content)
            .map(SummaryCandidate::new)
            .collect();

        Ok(BackendOutput { candidates })
    }

    #[cfg(not(feature = "openai"))]
    async fn summarize(
        &self,
        _text: &str,
        _params: &SummaryParams,
    ) -> SynopsisResult<BackendOutput> {
        Err(SynopsisError::Configuration(
            "OpenAI feature not enabled. Enable the 'openai' feature.".to_string(),
        ))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_applied_when_config_empty() {
        let backend = OpenAiBackend::new(BackendConfig {
            api_key: Some("test-key".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(backend.model_name(), "gpt-4o-mini");
    }

    #[test]
    fn explicit_model_is_kept() {
        let backend = OpenAiBackend::new(BackendConfig {
            model: "gpt-4o".into(),
            api_key: Some("test-key".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(backend.model_name(), "gpt-4o");
    }
}
