//! Extraction orchestrator: chains extractors with fallback policy.
//!
//! The sole entry point of the extraction side. Selects the extraction
//! path from the declared document kind, absorbs every extractor-level
//! failure into the fallback chain, and reports either final text or the
//! terminal "no extractable text" outcome. It never returns an error.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{ExtractError, ExtractResult};
use crate::rasterize::{PageRasterizer, RasterizedPage};
use crate::types::{DocumentKind, ExtractedText, ExtractionMethod, ExtractionOutcome};
use crate::Extractor;

/// Orchestrates the extraction fallback chain.
///
/// Constructed with injected, possibly-absent capability handles: a missing
/// OCR engine or rasterizer simply shortens the chain rather than failing
/// a request. Extraction paths run sequentially, never concurrently.
pub struct ExtractionOrchestrator {
    native: Option<Arc<dyn Extractor>>,
    ocr: Option<Arc<dyn Extractor>>,
    rasterizer: Option<Arc<dyn PageRasterizer>>,
}

impl ExtractionOrchestrator {
    /// Create an orchestrator with no capabilities registered.
    pub fn new() -> Self {
        Self {
            native: None,
            ocr: None,
            rasterizer: None,
        }
    }

    /// Create an orchestrator with every capability the compiled feature
    /// set provides.
    pub fn with_defaults() -> Self {
        let mut orchestrator = Self::new();

        #[cfg(feature = "pdf")]
        {
            orchestrator.native = Some(crate::ExtractorFactory::pdf());
        }

        #[cfg(feature = "ocr")]
        {
            orchestrator.ocr = Some(crate::ExtractorFactory::ocr());
        }

        #[cfg(feature = "rasterize")]
        {
            orchestrator.rasterizer = Some(crate::ExtractorFactory::rasterizer());
        }

        orchestrator
    }

    /// Register the native text extractor.
    pub fn with_native(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.native = Some(extractor);
        self
    }

    /// Register the OCR extractor.
    pub fn with_ocr(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.ocr = Some(extractor);
        self
    }

    /// Register the page rasterizer.
    pub fn with_rasterizer(mut self, rasterizer: Arc<dyn PageRasterizer>) -> Self {
        self.rasterizer = Some(rasterizer);
        self
    }

    /// Produce text for an accepted document, with bounded fallback.
    ///
    /// Structured documents try native extraction first and fall back to
    /// OCR of the rasterized first page only; raster images go straight to
    /// OCR. A final empty or whitespace-only result is reported as
    /// [`ExtractionOutcome::NoText`].
    pub async fn extract(&self, content: &[u8], kind: DocumentKind) -> ExtractionOutcome {
        let extracted = match kind {
            DocumentKind::StructuredText => self.extract_structured(content).await,
            DocumentKind::RasterImage => {
                let text = Self::absorb("ocr", self.run_ocr(content).await);
                ExtractedText::new(text, ExtractionMethod::Ocr)
            }
        };

        if extracted.is_empty() {
            info!(kind = kind.as_str(), "no extractable text");
            ExtractionOutcome::NoText
        } else {
            info!(
                kind = kind.as_str(),
                method = ?extracted.method,
                text_length = extracted.text.len(),
                "extraction complete"
            );
            ExtractionOutcome::Text(extracted)
        }
    }

    /// Native extraction with a single OCR-of-first-page fallback.
    async fn extract_structured(&self, content: &[u8]) -> ExtractedText {
        let native = Self::absorb("native", self.run_native(content).await);
        if !native.trim().is_empty() {
            return ExtractedText::new(native, ExtractionMethod::NativeText);
        }

        debug!("native extraction empty, falling back to first-page OCR");

        // Fallback is capped at page 0 to bound OCR cost on large
        // documents. The rasterized artifact is dropped (and its file
        // removed) before this function returns, whether or not OCR ran.
        let text = match self.rasterize_first_page(content).await {
            Ok(page) => match page.read() {
                Ok(bytes) => Self::absorb("ocr-fallback", self.run_ocr(&bytes).await),
                Err(e) => {
                    warn!(error = %e, "failed to read rasterized page");
                    String::new()
                }
            },
            Err(e) => {
                warn!(error = %e, "rasterization failed");
                String::new()
            }
        };

        ExtractedText::new(text, ExtractionMethod::OcrFallback)
    }

    async fn run_native(&self, content: &[u8]) -> ExtractResult<String> {
        let native = self
            .native
            .as_deref()
            .ok_or(ExtractError::CapabilityUnavailable("native text extractor"))?;
        native.extract(content).await
    }

    async fn run_ocr(&self, content: &[u8]) -> ExtractResult<String> {
        let ocr = self
            .ocr
            .as_deref()
            .ok_or(ExtractError::CapabilityUnavailable("OCR extractor"))?;
        ocr.extract(content).await
    }

    async fn rasterize_first_page(&self, content: &[u8]) -> ExtractResult<RasterizedPage> {
        let rasterizer = self
            .rasterizer
            .as_deref()
            .ok_or(ExtractError::CapabilityUnavailable("page rasterizer"))?;
        rasterizer.rasterize_page(content, 0).await
    }

    /// Absorb a stage-level failure into empty text.
    fn absorb(stage: &str, result: ExtractResult<String>) -> String {
        match result {
            Ok(text) => text,
            Err(e) => {
                warn!(stage, error = %e, "extraction stage produced no text");
                String::new()
            }
        }
    }
}

impl Default for ExtractionOrchestrator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExtractError, ExtractResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Stub extractor returning fixed text (or a fixed error) and counting
    /// invocations.
    struct StubExtractor {
        text: Option<String>,
        calls: AtomicUsize,
        inputs: Mutex<Vec<Vec<u8>>>,
    }

    impl StubExtractor {
        fn returning(text: &str) -> Arc<Self> {
            Arc::new(Self {
                text: Some(text.to_string()),
                calls: AtomicUsize::new(0),
                inputs: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                text: None,
                calls: AtomicUsize::new(0),
                inputs: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_input(&self) -> Option<Vec<u8>> {
            self.inputs.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl Extractor for StubExtractor {
        async fn extract(&self, content: &[u8]) -> ExtractResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inputs.lock().unwrap().push(content.to_vec());
            match &self.text {
                Some(text) => Ok(text.clone()),
                None => Err(ExtractError::Ocr("engine unavailable".into())),
            }
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    /// Stub rasterizer producing fixed bytes and recording page indexes.
    struct StubRasterizer {
        bytes: Option<Vec<u8>>,
        pages: Mutex<Vec<usize>>,
    }

    impl StubRasterizer {
        fn returning(bytes: &[u8]) -> Arc<Self> {
            Arc::new(Self {
                bytes: Some(bytes.to_vec()),
                pages: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                bytes: None,
                pages: Mutex::new(Vec::new()),
            })
        }

        fn rasterized_pages(&self) -> Vec<usize> {
            self.pages.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageRasterizer for StubRasterizer {
        async fn rasterize_page(
            &self,
            _document: &[u8],
            page_index: usize,
        ) -> ExtractResult<RasterizedPage> {
            self.pages.lock().unwrap().push(page_index);
            match &self.bytes {
                Some(bytes) => RasterizedPage::from_bytes(bytes),
                None => Err(ExtractError::Rasterize("invalid page".into())),
            }
        }

        fn name(&self) -> &str {
            "stub-rasterizer"
        }
    }

    #[tokio::test]
    async fn native_text_is_returned_without_fallback() {
        let native = StubExtractor::returning("Hello\n\nWorld");
        let ocr = StubExtractor::returning("should never run");
        let rasterizer = StubRasterizer::returning(b"png");

        let orchestrator = ExtractionOrchestrator::new()
            .with_native(native.clone())
            .with_ocr(ocr.clone())
            .with_rasterizer(rasterizer.clone());

        let outcome = orchestrator
            .extract(b"%PDF-", DocumentKind::StructuredText)
            .await;

        let extracted = outcome.into_text().unwrap();
        assert_eq!(extracted.text, "Hello\n\nWorld");
        assert_eq!(extracted.method, ExtractionMethod::NativeText);
        assert_eq!(native.calls(), 1);
        assert_eq!(ocr.calls(), 0);
        assert!(rasterizer.rasterized_pages().is_empty());
    }

    #[tokio::test]
    async fn empty_native_text_falls_back_to_first_page_ocr() {
        let native = StubExtractor::returning("   \n ");
        let ocr = StubExtractor::returning("Scanned content");
        let rasterizer = StubRasterizer::returning(b"rendered page");

        let orchestrator = ExtractionOrchestrator::new()
            .with_native(native.clone())
            .with_ocr(ocr.clone())
            .with_rasterizer(rasterizer.clone());

        let outcome = orchestrator
            .extract(b"%PDF-", DocumentKind::StructuredText)
            .await;

        let extracted = outcome.into_text().unwrap();
        assert_eq!(extracted.text, "Scanned content");
        assert_eq!(extracted.method, ExtractionMethod::OcrFallback);
        // Exactly page 0, exactly once
        assert_eq!(rasterizer.rasterized_pages(), vec![0]);
        // OCR received the rasterized bytes, not the original document
        assert_eq!(ocr.last_input().unwrap(), b"rendered page");
    }

    #[tokio::test]
    async fn empty_native_and_empty_ocr_is_no_text() {
        let native = StubExtractor::returning("");
        let ocr = StubExtractor::returning("");
        let rasterizer = StubRasterizer::returning(b"rendered page");

        let orchestrator = ExtractionOrchestrator::new()
            .with_native(native)
            .with_ocr(ocr)
            .with_rasterizer(rasterizer);

        let outcome = orchestrator
            .extract(b"%PDF-", DocumentKind::StructuredText)
            .await;
        assert!(outcome.is_no_text());
    }

    #[tokio::test]
    async fn native_extractor_error_is_absorbed_into_fallback() {
        let native = StubExtractor::failing();
        let ocr = StubExtractor::returning("recovered via ocr");
        let rasterizer = StubRasterizer::returning(b"page");

        let orchestrator = ExtractionOrchestrator::new()
            .with_native(native)
            .with_ocr(ocr)
            .with_rasterizer(rasterizer);

        let outcome = orchestrator
            .extract(b"broken", DocumentKind::StructuredText)
            .await;
        let extracted = outcome.into_text().unwrap();
        assert_eq!(extracted.text, "recovered via ocr");
        assert_eq!(extracted.method, ExtractionMethod::OcrFallback);
    }

    #[tokio::test]
    async fn raster_image_goes_straight_to_ocr() {
        let native = StubExtractor::returning("native text that must not be used");
        let ocr = StubExtractor::returning("image text");
        let rasterizer = StubRasterizer::returning(b"png");

        let orchestrator = ExtractionOrchestrator::new()
            .with_native(native.clone())
            .with_ocr(ocr.clone())
            .with_rasterizer(rasterizer.clone());

        let outcome = orchestrator.extract(b"\x89PNG", DocumentKind::RasterImage).await;

        let extracted = outcome.into_text().unwrap();
        assert_eq!(extracted.text, "image text");
        assert_eq!(extracted.method, ExtractionMethod::Ocr);
        assert_eq!(native.calls(), 0);
        assert!(rasterizer.rasterized_pages().is_empty());
        assert_eq!(ocr.last_input().unwrap(), b"\x89PNG");
    }

    #[tokio::test]
    async fn raster_image_with_empty_ocr_is_no_text() {
        let ocr = StubExtractor::returning("");
        let orchestrator = ExtractionOrchestrator::new().with_ocr(ocr);

        let outcome = orchestrator.extract(b"\x89PNG", DocumentKind::RasterImage).await;
        assert!(outcome.is_no_text());
    }

    #[tokio::test]
    async fn missing_rasterizer_ends_the_chain_quietly() {
        let native = StubExtractor::returning("");
        let ocr = StubExtractor::returning("never reached");

        let orchestrator = ExtractionOrchestrator::new()
            .with_native(native)
            .with_ocr(ocr.clone());

        let outcome = orchestrator
            .extract(b"%PDF-", DocumentKind::StructuredText)
            .await;
        assert!(outcome.is_no_text());
        assert_eq!(ocr.calls(), 0);
    }

    #[tokio::test]
    async fn rasterizer_failure_is_absorbed() {
        let native = StubExtractor::returning("");
        let ocr = StubExtractor::returning("never reached");
        let rasterizer = StubRasterizer::failing();

        let orchestrator = ExtractionOrchestrator::new()
            .with_native(native)
            .with_ocr(ocr.clone())
            .with_rasterizer(rasterizer);

        let outcome = orchestrator
            .extract(b"%PDF-", DocumentKind::StructuredText)
            .await;
        assert!(outcome.is_no_text());
        assert_eq!(ocr.calls(), 0);
    }

    #[tokio::test]
    async fn no_capabilities_registered_is_no_text_not_a_panic() {
        let orchestrator = ExtractionOrchestrator::new();

        let structured = orchestrator
            .extract(b"%PDF-", DocumentKind::StructuredText)
            .await;
        assert!(structured.is_no_text());

        let raster = orchestrator.extract(b"\x89PNG", DocumentKind::RasterImage).await;
        assert!(raster.is_no_text());
    }
}
