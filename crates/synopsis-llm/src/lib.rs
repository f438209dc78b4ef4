//! synopsis-llm - Summarization backend implementations for synopsis.
//!
//! # Supported Providers
//!
//! - **OpenAI** (feature: `openai`) - GPT-4o-mini and compatible APIs
//! - **Ollama** (feature: `ollama`) - Local models via Ollama
//!
//! # Example
//!
//! ```ignore
//! use synopsis_llm::SummaryBackendFactory;
//!
//! // From explicit provider
//! let backend = SummaryBackendFactory::openai()?;
//!
//! // From environment; None when no provider is configured
//! let backend = SummaryBackendFactory::from_env()?;
//! ```

mod factory;
mod ollama;
mod openai;

pub use factory::SummaryBackendFactory;
pub use ollama::OllamaBackend;
pub use openai::OpenAiBackend;

// Re-export core types for convenience
pub use synopsis_core::config::{BackendConfig, BackendProvider, SummaryConfig};
pub use synopsis_core::traits::{BackendOutput, SummaryBackend, SummaryCandidate, SummaryParams};

/// Build the prompt sent to chat-style backends.
///
/// Length bounds are carried in the instruction; providers additionally map
/// `max_length` to their token-limit parameter where the API supports it.
pub(crate) fn build_prompt(text: &str, params: &SummaryParams) -> (String, String) {
    let system = "You are a summarization engine. Respond with only the summary text, \
                  no preamble and no commentary."
        .to_string();
    let user = format!(
        "Summarize the following text in between {} and {} words:\n\n{}",
        params.min_length, params.max_length, text
    );
    (system, user)
}
