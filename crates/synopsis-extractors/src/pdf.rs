//! Native PDF text extraction using pdf-extract.
//!
//! Pulls embedded text page by page and joins pages with a single newline.
//! Wraps the synchronous pdf-extract calls in spawn_blocking to avoid
//! blocking the async runtime.

use crate::error::{ExtractError, ExtractResult};
use crate::Extractor;
use async_trait::async_trait;

/// Native text extractor for structured documents (PDF).
///
/// An unreadable or corrupt document surfaces as [`ExtractError::Pdf`];
/// the orchestrator treats that as "no native text", not a fatal error.
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract per-page text synchronously (called within spawn_blocking).
    fn extract_sync(content: Vec<u8>) -> Result<String, ExtractError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(&content)
            .map_err(|e| ExtractError::Pdf(format!("Failed to parse PDF: {e}")))?;
        Ok(pages.join("\n"))
    }
}

#[async_trait]
impl Extractor for PdfTextExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<String> {
        let content = content.to_vec();
        tokio::task::spawn_blocking(move || Self::extract_sync(content)).await?
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn garbage_bytes_yield_typed_pdf_error() {
        let extractor = PdfTextExtractor::new();
        let result = extractor.extract(b"not a pdf at all").await;
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }

    #[test]
    fn extractor_name() {
        assert_eq!(PdfTextExtractor::new().name(), "pdf-extract");
    }
}
