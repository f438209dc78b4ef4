//! Ollama summarization backend.

use async_trait::async_trait;

use synopsis_core::config::BackendConfig;
use synopsis_core::error::{SynopsisError, SynopsisResult};
use synopsis_core::traits::{BackendOutput, SummaryBackend, SummaryCandidate, SummaryParams};

#[cfg(feature = "ollama")]
use ollama_rs::{
    generation::chat::{request::ChatMessageRequest, ChatMessage, MessageRole},
    Ollama,
};

/// Ollama summarization backend for local models.
pub struct OllamaBackend {
    #[cfg(feature = "ollama")]
    client: Ollama,
    config: BackendConfig,
}

impl OllamaBackend {
    /// Create a new Ollama backend.
    pub fn new(config: BackendConfig) -> SynopsisResult<Self> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "http://localhost:11434".to_string());

        let url = url::Url::parse(&base_url)
            .map_err(|e| SynopsisError::Configuration(format!("Invalid Ollama URL: {e}")))?;

        let host = url.host_str().unwrap_or("localhost").to_string();
        let port = url.port().unwrap_or(11434);

        #[cfg(feature = "ollama")]
        let client = Ollama::new(format!("http://{host}"), port);

        #[cfg(not(feature = "ollama"))]
        let _ = (host, port);

        let mut config = config;
        if config.model.is_empty() {
            config.model = "llama3.1:8b".to_string();
        }

        Ok(Self {
            #[cfg(feature = "ollama")]
            client,
            config,
        })
    }
}

#[async_trait]
impl SummaryBackend for OllamaBackend {
    #[cfg(feature = "ollama")]
    async fn summarize(
        &self,
        text: &str,
        params: &SummaryParams,
    ) -> SynopsisResult<BackendOutput> {
        let (system, user) = crate::build_prompt(text, params);

        let messages = vec![
            ChatMessage {
                role: MessageRole::System,
                content: system,
                images: None,
            },
            ChatMessage {
                role: MessageRole::User,
                content: user,
                images: None,
            },
        ];

        let request = ChatMessageRequest::new(self.config.model.clone(), messages);

        let response = self
            .client
            .send_chat_messages(request)
            .await
            .map_err(|e| SynopsisError::backend(format!("Ollama API error: {e}")))?;

        let candidates = response
            .message
            .map(|m| vec![SummaryCandidate::new(m.content)])
            .unwrap_or_default();

        Ok(BackendOutput { candidates })
    }

    #[cfg(not(feature = "ollama"))]
    async fn summarize(
        &self,
        _text: &str,
        _params: &SummaryParams,
    ) -> SynopsisResult<BackendOutput> {
        Err(SynopsisError::Configuration(
            "Ollama feature not enabled. Enable the 'ollama' feature.".to_string(),
        ))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
