//! Page rasterization: the bridge from a structured document into OCR.
//!
//! Used only when native text extraction yields nothing, and only ever for
//! the first page. The rasterized page lives in a named temp file that is
//! removed when the value is dropped, so the artifact cannot outlive the
//! extraction call that created it.

use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use tempfile::NamedTempFile;

use crate::error::{ExtractError, ExtractResult};

/// Render resolution for rasterized pages.
pub const RASTER_DPI: f32 = 200.0;

/// A rasterized page held in a transient file.
///
/// Deletion happens on drop; a failed removal is ignored, matching the
/// best-effort cleanup contract.
pub struct RasterizedPage {
    file: NamedTempFile,
}

impl RasterizedPage {
    /// Stage encoded image bytes into a transient file.
    pub fn from_bytes(bytes: &[u8]) -> ExtractResult<Self> {
        let mut file = NamedTempFile::new()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    /// Path of the transient artifact.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read the artifact back as bytes.
    pub fn read(&self) -> ExtractResult<Vec<u8>> {
        Ok(std::fs::read(self.file.path())?)
    }
}

/// Renders one page of a structured document into a raster image.
#[async_trait]
pub trait PageRasterizer: Send + Sync {
    /// Rasterize the zero-based `page_index` of `document` at [`RASTER_DPI`].
    async fn rasterize_page(
        &self,
        document: &[u8],
        page_index: usize,
    ) -> ExtractResult<RasterizedPage>;

    /// Human-readable name for this rasterizer.
    fn name(&self) -> &str;
}

/// PDF page rasterizer backed by pdfium.
///
/// Binds to the system pdfium library per call; the binding is not Sync, so
/// it lives inside the blocking task.
#[cfg(feature = "rasterize")]
#[derive(Debug, Clone, Default)]
pub struct PdfiumRasterizer;

#[cfg(feature = "rasterize")]
impl PdfiumRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Map a zero-based page index into pdfium's page-number range.
    fn page_number(page_index: usize) -> Result<u16, ExtractError> {
        u16::try_from(page_index)
            .map_err(|_| ExtractError::Rasterize(format!("Page index {page_index} out of range")))
    }

    /// Render a page to PNG bytes synchronously (called within spawn_blocking).
    fn render_sync(document: Vec<u8>, page_index: usize) -> Result<Vec<u8>, ExtractError> {
        use pdfium_render::prelude::*;

        let page_number = Self::page_number(page_index)?;

        let bindings = Pdfium::bind_to_system_library()
            .map_err(|e| ExtractError::Rasterize(format!("Failed to load pdfium: {e:?}")))?;
        let pdfium = Pdfium::new(bindings);

        let doc = pdfium
            .load_pdf_from_byte_slice(&document, None)
            .map_err(|e| ExtractError::Rasterize(format!("Failed to open document: {e:?}")))?;

        let page = doc
            .pages()
            .get(page_number)
            .map_err(|e| ExtractError::Rasterize(format!("Invalid page {page_index}: {e:?}")))?;

        let width_px = (page.width().value / 72.0 * RASTER_DPI) as i32;
        let height_px = (page.height().value / 72.0 * RASTER_DPI) as i32;
        let config = PdfRenderConfig::new()
            .set_target_width(width_px)
            .set_maximum_height(height_px);

        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| ExtractError::Rasterize(format!("Render failed: {e:?}")))?;

        let mut png = std::io::Cursor::new(Vec::new());
        bitmap
            .as_image()
            .write_to(&mut png, image::ImageFormat::Png)
            .map_err(|e| ExtractError::Rasterize(format!("PNG encoding failed: {e}")))?;

        Ok(png.into_inner())
    }
}

#[cfg(feature = "rasterize")]
#[async_trait]
impl PageRasterizer for PdfiumRasterizer {
    async fn rasterize_page(
        &self,
        document: &[u8],
        page_index: usize,
    ) -> ExtractResult<RasterizedPage> {
        let document = document.to_vec();
        let png =
            tokio::task::spawn_blocking(move || Self::render_sync(document, page_index)).await??;
        RasterizedPage::from_bytes(&png)
    }

    fn name(&self) -> &str {
        "pdfium"
    }
}
