//! Core types for text extraction.

use serde::{Deserialize, Serialize};

/// Declared kind of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// A format with an internal page/text model (PDF) from which text can
    /// sometimes be extracted without rendering.
    StructuredText,
    /// A pixel-based format with no embedded text model; text must be
    /// recovered via OCR.
    RasterImage,
}

impl DocumentKind {
    /// Classify a file extension into a document kind.
    ///
    /// Returns `None` for extensions the pipeline does not accept.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim().to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::StructuredText),
            "png" | "jpg" | "jpeg" | "tiff" | "tif" => Some(DocumentKind::RasterImage),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::StructuredText => "structured-text-document",
            DocumentKind::RasterImage => "raster-image",
        }
    }
}

/// The extraction path that produced the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Embedded text pulled directly from the document.
    NativeText,
    /// OCR run directly on an uploaded raster image.
    Ocr,
    /// OCR run on the rasterized first page after native extraction
    /// yielded nothing.
    OcrFallback,
}

/// Text produced by exactly one extraction path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedText {
    /// The extracted text.
    pub text: String,
    /// Which extraction path produced it.
    pub method: ExtractionMethod,
}

impl ExtractedText {
    pub fn new(text: String, method: ExtractionMethod) -> Self {
        Self { text, method }
    }

    /// Whether extraction produced no meaningful content.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The first `max_chars` characters of the text, on char boundaries.
    pub fn snippet(&self, max_chars: usize) -> String {
        self.text.chars().take(max_chars).collect()
    }
}

/// Terminal result of the extraction chain.
///
/// `NoText` is a value, not an error: the whole fallback chain ran and
/// nothing usable came out. The caller must not invoke the summarizer in
/// that case.
#[derive(Debug, Clone)]
pub enum ExtractionOutcome {
    /// Usable text was extracted.
    Text(ExtractedText),
    /// The chain completed with empty or whitespace-only text.
    NoText,
}

impl ExtractionOutcome {
    pub fn is_no_text(&self) -> bool {
        matches!(self, ExtractionOutcome::NoText)
    }

    pub fn into_text(self) -> Option<ExtractedText> {
        match self {
            ExtractionOutcome::Text(t) => Some(t),
            ExtractionOutcome::NoText => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_classification() {
        assert_eq!(
            DocumentKind::from_extension("pdf"),
            Some(DocumentKind::StructuredText)
        );
        for ext in ["png", "jpg", "jpeg", "tiff", "tif"] {
            assert_eq!(
                DocumentKind::from_extension(ext),
                Some(DocumentKind::RasterImage),
                "extension {ext}"
            );
        }
    }

    #[test]
    fn extension_classification_is_case_insensitive() {
        assert_eq!(
            DocumentKind::from_extension("PDF"),
            Some(DocumentKind::StructuredText)
        );
        assert_eq!(
            DocumentKind::from_extension("JPeG"),
            Some(DocumentKind::RasterImage)
        );
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        for ext in ["docx", "txt", "gif", "webp", ""] {
            assert_eq!(DocumentKind::from_extension(ext), None, "extension {ext}");
        }
    }

    #[test]
    fn whitespace_only_text_is_empty() {
        let extracted = ExtractedText::new("  \n\t ".into(), ExtractionMethod::NativeText);
        assert!(extracted.is_empty());
        assert!(!ExtractedText::new("Hello".into(), ExtractionMethod::Ocr).is_empty());
    }

    #[test]
    fn snippet_respects_char_boundaries() {
        let extracted = ExtractedText::new("héllo wörld".into(), ExtractionMethod::NativeText);
        assert_eq!(extracted.snippet(5), "héllo");
        assert_eq!(extracted.snippet(100), "héllo wörld");
    }
}
