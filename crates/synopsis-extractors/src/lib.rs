//! synopsis-extractors - Text extraction for document summarization.
//!
//! Provides extractors for PDF and raster-image content with a unified
//! trait-based interface, plus the orchestrator that chains them with
//! fallback policy.
//!
//! # Features
//!
//! - `pdf` (default) - native PDF text extraction via pdf-extract
//! - `ocr` - image OCR via tesseract (requires tesseract installed)
//! - `rasterize` - PDF page rasterization via pdfium (requires libpdfium)
//! - `full` - all extraction capabilities
//!
//! # Example
//!
//! ```ignore
//! use synopsis_extractors::{DocumentKind, ExtractionOrchestrator, ExtractionOutcome};
//!
//! let orchestrator = ExtractionOrchestrator::with_defaults();
//! match orchestrator.extract(&pdf_bytes, DocumentKind::StructuredText).await {
//!     ExtractionOutcome::Text(extracted) => println!("{}", extracted.text),
//!     ExtractionOutcome::NoText => println!("no extractable text"),
//! }
//! ```

mod error;
mod factory;
mod orchestrator;
mod rasterize;
mod types;

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "ocr")]
mod ocr;

pub use error::{ExtractError, ExtractResult};
pub use factory::ExtractorFactory;
pub use orchestrator::ExtractionOrchestrator;
pub use rasterize::{PageRasterizer, RasterizedPage, RASTER_DPI};
pub use types::{DocumentKind, ExtractedText, ExtractionMethod, ExtractionOutcome};

#[cfg(feature = "pdf")]
pub use pdf::PdfTextExtractor;

#[cfg(feature = "ocr")]
pub use ocr::OcrExtractor;

#[cfg(feature = "rasterize")]
pub use rasterize::PdfiumRasterizer;

use async_trait::async_trait;

/// Core Extractor trait - all text extractors implement this.
///
/// Extractors return typed failures rather than silently yielding empty
/// text; the orchestrator is the single place that absorbs those failures
/// into the fallback chain.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract text content from bytes.
    async fn extract(&self, content: &[u8]) -> ExtractResult<String>;

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
