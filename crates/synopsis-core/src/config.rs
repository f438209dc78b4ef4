//! Configuration system for synopsis.

use serde::{Deserialize, Serialize};

/// Summarization backend provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendProvider {
    #[default]
    OpenAI,
    Ollama,
}

impl BackendProvider {
    /// Parse a provider name; unknown names yield `None`, which the caller
    /// treats as "no backend configured".
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "openai" => Some(BackendProvider::OpenAI),
            "ollama" => Some(BackendProvider::Ollama),
            _ => None,
        }
    }
}

/// Backend connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackendConfig {
    /// Model name/identifier. Empty selects the provider default.
    #[serde(default)]
    pub model: String,
    /// API key (if not using environment variable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL for the provider API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Summarization configuration.
///
/// `provider: None` means no summarization backend is configured; the
/// service still runs and serves the unavailability sentinel.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SummaryConfig {
    /// Backend provider, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<BackendProvider>,
    /// Provider connection settings.
    #[serde(flatten)]
    pub config: BackendConfig,
}

impl SummaryConfig {
    /// Load configuration from environment variables.
    ///
    /// - `SYNOPSIS_SUMMARY_PROVIDER` - `openai` | `ollama`; unset or
    ///   unrecognized disables summarization.
    /// - `SYNOPSIS_SUMMARY_MODEL` - model override.
    /// - `SYNOPSIS_SUMMARY_BASE_URL` - provider base URL override.
    /// - `OPENAI_API_KEY` - API key for the OpenAI provider.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(provider) = std::env::var("SYNOPSIS_SUMMARY_PROVIDER") {
            config.provider = BackendProvider::parse(&provider);
        }
        if let Ok(model) = std::env::var("SYNOPSIS_SUMMARY_MODEL") {
            config.config.model = model;
        }
        if let Ok(base_url) = std::env::var("SYNOPSIS_SUMMARY_BASE_URL") {
            config.config.base_url = Some(base_url);
        }
        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            config.config.api_key = Some(api_key);
        }

        config
    }
}
