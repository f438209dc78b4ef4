//! Extraction error types.

use thiserror::Error;

/// Errors that can occur during text extraction.
///
/// These carry the structured reason an extractor produced nothing; the
/// orchestrator absorbs them into the fallback chain and never propagates
/// them past its entry point.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// No extractor is registered for the requested capability.
    #[error("Capability not available: {0}")]
    CapabilityUnavailable(&'static str),

    /// Image content could not be decoded.
    #[error("Image error: {0}")]
    Image(String),

    /// IO error during extraction.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF-specific extraction error.
    #[error("PDF extraction error: {0}")]
    Pdf(String),

    /// OCR engine error.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// Page rasterization error.
    #[error("Rasterization error: {0}")]
    Rasterize(String),

    /// Task join error from spawn_blocking.
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_capability_names_the_capability() {
        let err = ExtractError::CapabilityUnavailable("page rasterizer");
        assert_eq!(err.to_string(), "Capability not available: page rasterizer");
    }
}
