//! Optical character recognition using tesseract.
//!
//! Converts a raster image into text with default engine settings: no
//! language hint, no layout analysis tuning. Tesseract runs in a blocking
//! task.

use crate::error::{ExtractError, ExtractResult};
use crate::Extractor;
use async_trait::async_trait;
use rusty_tesseract::Args;

/// OCR extractor for raster images.
///
/// Requires the tesseract binary to be installed; a missing or failing
/// engine surfaces as [`ExtractError::Ocr`], which the orchestrator treats
/// as "no recognized text".
#[derive(Debug, Clone, Default)]
pub struct OcrExtractor;

impl OcrExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Detect image format from magic numbers.
    pub(crate) fn detect_format(content: &[u8]) -> Result<&'static str, ExtractError> {
        if content.len() < 8 {
            return Err(ExtractError::Image("Content too short".to_string()));
        }

        if content.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            Ok("png")
        } else if content.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Ok("jpeg")
        } else if content.starts_with(b"II*\x00") || content.starts_with(b"MM\x00*") {
            Ok("tiff")
        } else {
            Err(ExtractError::Image("Unknown image format".to_string()))
        }
    }

    /// Run tesseract synchronously (called within spawn_blocking).
    fn ocr_sync(content: Vec<u8>) -> Result<String, ExtractError> {
        let img = image::load_from_memory(&content)
            .map_err(|e| ExtractError::Image(format!("Failed to decode image: {e}")))?;

        // Grayscale form that tesseract handles best
        let gray = image::DynamicImage::ImageLuma8(img.to_luma8());
        let tess_image = rusty_tesseract::Image::from_dynamic_image(&gray)
            .map_err(|e| ExtractError::Ocr(format!("Failed to prepare image: {e}")))?;

        rusty_tesseract::image_to_string(&tess_image, &Args::default())
            .map_err(|e| ExtractError::Ocr(format!("Tesseract failed: {e}")))
    }
}

#[async_trait]
impl Extractor for OcrExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<String> {
        Self::detect_format(content)?;

        let content = content.to_vec();
        tokio::task::spawn_blocking(move || Self::ocr_sync(content)).await?
    }

    fn name(&self) -> &str {
        "tesseract-ocr"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection_png() {
        let png = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(OcrExtractor::detect_format(&png).unwrap(), "png");
    }

    #[test]
    fn format_detection_jpeg() {
        let jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
        assert_eq!(OcrExtractor::detect_format(&jpeg).unwrap(), "jpeg");
    }

    #[test]
    fn format_detection_tiff_both_byte_orders() {
        let little_endian = b"II*\x00\x08\x00\x00\x00";
        assert_eq!(OcrExtractor::detect_format(little_endian).unwrap(), "tiff");

        let big_endian = b"MM\x00*\x00\x00\x00\x08";
        assert_eq!(OcrExtractor::detect_format(big_endian).unwrap(), "tiff");
    }

    #[test]
    fn format_detection_unknown() {
        let unknown = vec![0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        assert!(matches!(
            OcrExtractor::detect_format(&unknown),
            Err(ExtractError::Image(_))
        ));
    }

    #[test]
    fn format_detection_too_short() {
        let short = vec![0x89, 0x50];
        assert!(OcrExtractor::detect_format(&short).is_err());
    }

    #[tokio::test]
    async fn undecodable_content_yields_typed_error() {
        let extractor = OcrExtractor::new();
        let result = extractor.extract(b"definitely not pixels").await;
        assert!(matches!(result, Err(ExtractError::Image(_))));
    }
}
