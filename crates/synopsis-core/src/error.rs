//! Error types for synopsis operations.

use thiserror::Error;

/// Result type alias for synopsis operations.
pub type SynopsisResult<T> = Result<T, SynopsisError>;

/// Main error type for core synopsis operations.
#[derive(Error, Debug)]
pub enum SynopsisError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Summarization backend failed.
    #[error("Backend error: {message}")]
    Backend {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SynopsisError {
    /// Create a backend error with just a message.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Create a backend error wrapping a source error.
    pub fn backend_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Backend {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
