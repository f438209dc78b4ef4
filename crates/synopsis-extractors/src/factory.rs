//! Factory for creating extractors.

use std::sync::Arc;

use crate::Extractor;

#[cfg(feature = "rasterize")]
use crate::rasterize::{PageRasterizer, PdfiumRasterizer};

#[cfg(feature = "pdf")]
use crate::PdfTextExtractor;

#[cfg(feature = "ocr")]
use crate::OcrExtractor;

/// Factory for creating text extractors.
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create the native PDF text extractor.
    #[cfg(feature = "pdf")]
    pub fn pdf() -> Arc<dyn Extractor> {
        Arc::new(PdfTextExtractor::new())
    }

    /// Create the tesseract OCR extractor.
    #[cfg(feature = "ocr")]
    pub fn ocr() -> Arc<dyn Extractor> {
        Arc::new(OcrExtractor::new())
    }

    /// Create the pdfium page rasterizer.
    #[cfg(feature = "rasterize")]
    pub fn rasterizer() -> Arc<dyn PageRasterizer> {
        Arc::new(PdfiumRasterizer::new())
    }
}
