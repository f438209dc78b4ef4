//! Document upload and summarization endpoint.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use synopsis_core::LengthTier;
use synopsis_extractors::{DocumentKind, ExtractionOutcome};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Characters of extracted text echoed back alongside the summary.
const SNIPPET_CHARS: usize = 2000;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub summary: String,
    pub text_snippet: String,
}

/// Upload a document and receive a summary.
/// POST /api/upload (multipart: `file`, optional `length`)
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut tier = LengthTier::Medium;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("failed to read upload: {e}")))?;
                file = Some((filename, data.to_vec()));
            }
            "length" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("failed to read field: {e}")))?;
                tier = LengthTier::parse(&value);
            }
            _ => {}
        }
    }

    let (filename, data) = file.ok_or_else(|| ApiError::bad_request("no file part"))?;
    if filename.is_empty() {
        return Err(ApiError::bad_request("no file selected"));
    }

    let kind =
        classify(&filename).ok_or_else(|| ApiError::unsupported_media_type("file type not allowed"))?;

    info!(
        filename = %filename,
        size = data.len(),
        kind = kind.as_str(),
        tier = tier.as_str(),
        "processing upload"
    );

    match state.orchestrator.extract(&data, kind).await {
        ExtractionOutcome::NoText => Err(ApiError::unprocessable("no text found via parsing/OCR")),
        ExtractionOutcome::Text(extracted) => {
            let summary = state.summarizer.summarize(&extracted.text, tier).await;
            Ok(Json(UploadResponse {
                summary,
                text_snippet: extracted.snippet(SNIPPET_CHARS),
            }))
        }
    }
}

/// Classify a filename into a document kind by its extension.
fn classify(filename: &str) -> Option<DocumentKind> {
    let (_, ext) = filename.rsplit_once('.')?;
    DocumentKind::from_extension(ext)
}
