//! SummaryBackend trait and related types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::SynopsisResult;

/// Generation bounds passed to a summarization backend, in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryParams {
    /// Minimum requested summary length.
    pub min_length: u32,
    /// Maximum requested summary length.
    pub max_length: u32,
}

impl SummaryParams {
    pub fn new(min_length: u32, max_length: u32) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

/// One candidate summary produced by a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryCandidate {
    /// The generated summary text. Missing fields deserialize to empty.
    #[serde(default)]
    pub summary_text: String,
}

impl SummaryCandidate {
    pub fn new(summary_text: impl Into<String>) -> Self {
        Self {
            summary_text: summary_text.into(),
        }
    }
}

/// Raw output of a summarization backend call.
///
/// Backends return a candidate list; the summarizer takes the first
/// candidate's text and falls back to a string rendering of the whole
/// output when the list is empty or malformed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendOutput {
    #[serde(default)]
    pub candidates: Vec<SummaryCandidate>,
}

impl BackendOutput {
    /// Build an output holding a single candidate.
    pub fn single(summary_text: impl Into<String>) -> Self {
        Self {
            candidates: vec![SummaryCandidate::new(summary_text)],
        }
    }
}

/// Core summarization backend trait - all providers implement this.
///
/// A backend is assumed stateless per call and safe to reuse sequentially;
/// concurrency across simultaneous calls is the deployment's concern.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    /// Produce a summary of `text` within the requested bounds.
    ///
    /// Implementations must invoke the underlying model exactly once and
    /// deterministically (no sampling).
    async fn summarize(&self, text: &str, params: &SummaryParams)
        -> SynopsisResult<BackendOutput>;

    /// Get the model name/identifier.
    fn model_name(&self) -> &str;
}
