//! Factory for creating summarization backends.

use std::sync::Arc;

use synopsis_core::config::{BackendConfig, BackendProvider, SummaryConfig};
use synopsis_core::error::SynopsisResult;
use synopsis_core::traits::SummaryBackend;

use crate::ollama::OllamaBackend;
use crate::openai::OpenAiBackend;

/// Factory for creating summarization backends.
pub struct SummaryBackendFactory;

impl SummaryBackendFactory {
    /// Create a backend from the given provider and configuration.
    pub fn create(
        provider: BackendProvider,
        config: BackendConfig,
    ) -> SynopsisResult<Arc<dyn SummaryBackend>> {
        match provider {
            BackendProvider::OpenAI => {
                let backend = OpenAiBackend::new(config)?;
                Ok(Arc::new(backend))
            }
            BackendProvider::Ollama => {
                let backend = OllamaBackend::new(config)?;
                Ok(Arc::new(backend))
            }
        }
    }

    /// Create an OpenAI backend with default configuration.
    pub fn openai() -> SynopsisResult<Arc<dyn SummaryBackend>> {
        Self::create(BackendProvider::OpenAI, BackendConfig::default())
    }

    /// Create an OpenAI backend with a specific model.
    pub fn openai_with_model(model: impl Into<String>) -> SynopsisResult<Arc<dyn SummaryBackend>> {
        let config = BackendConfig {
            model: model.into(),
            ..Default::default()
        };
        Self::create(BackendProvider::OpenAI, config)
    }

    /// Create an Ollama backend with default configuration.
    pub fn ollama() -> SynopsisResult<Arc<dyn SummaryBackend>> {
        Self::create(BackendProvider::Ollama, BackendConfig::default())
    }

    /// Create an Ollama backend with a specific model.
    pub fn ollama_with_model(model: impl Into<String>) -> SynopsisResult<Arc<dyn SummaryBackend>> {
        let config = BackendConfig {
            model: model.into(),
            ..Default::default()
        };
        Self::create(BackendProvider::Ollama, config)
    }

    /// Create a backend from environment configuration.
    ///
    /// Returns `Ok(None)` when no provider is configured: summarization is
    /// an optional capability and its absence is not an error.
    pub fn from_env() -> SynopsisResult<Option<Arc<dyn SummaryBackend>>> {
        let summary_config = SummaryConfig::from_env();
        match summary_config.provider {
            None => Ok(None),
            Some(provider) => Self::create(provider, summary_config.config).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_creates_ollama_backend() {
        let backend = SummaryBackendFactory::ollama_with_model("mistral").unwrap();
        assert_eq!(backend.model_name(), "mistral");
    }

    #[test]
    fn factory_creates_openai_backend_with_key_in_config() {
        let backend = SummaryBackendFactory::create(
            BackendProvider::OpenAI,
            BackendConfig {
                api_key: Some("test-key".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(backend.model_name(), "gpt-4o-mini");
    }
}
