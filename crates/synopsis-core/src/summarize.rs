//! Summarizer engine.
//!
//! Wraps a possibly-absent [`SummaryBackend`] and applies the input cap and
//! length-tier bounds before the single backend invocation. All failures
//! degrade to descriptive summary strings; this module never returns an
//! error to its caller.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::traits::{SummaryBackend, SummaryParams};
use crate::types::LengthTier;

/// Hard input-size cap, in whitespace-delimited tokens. Longer inputs are
/// truncated before summarization to bound backend latency and memory.
pub const MAX_INPUT_TOKENS: usize = 1200;

/// Fixed sentinel returned when no summarization backend is configured.
pub const UNAVAILABLE_MESSAGE: &str =
    "Summarizer not available. No summarization backend is configured.";

/// Length-tunable text summarizer.
///
/// The caller guarantees non-empty input text; extraction must have
/// produced something before this is invoked.
pub struct Summarizer {
    backend: Option<Arc<dyn SummaryBackend>>,
}

impl Summarizer {
    /// Create a summarizer with the given backend.
    pub fn new(backend: Arc<dyn SummaryBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Create a summarizer with an optional backend handle.
    pub fn with_backend(backend: Option<Arc<dyn SummaryBackend>>) -> Self {
        Self { backend }
    }

    /// Create a summarizer with no backend; every call returns the
    /// unavailability sentinel.
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    /// Whether a backend is configured.
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// The configured backend's model name, if any.
    pub fn model_name(&self) -> Option<&str> {
        self.backend.as_deref().map(|b| b.model_name())
    }

    /// Summarize `text` at the requested length tier.
    ///
    /// Returns the backend's summary, the unavailability sentinel, or a
    /// `"Summarization error: ..."` string on backend failure. Never fails.
    pub async fn summarize(&self, text: &str, tier: LengthTier) -> String {
        let Some(backend) = self.backend.as_deref() else {
            return UNAVAILABLE_MESSAGE.to_string();
        };

        let input = truncate_tokens(text, MAX_INPUT_TOKENS);
        let (min_length, max_length) = tier.bounds();
        let params = SummaryParams::new(min_length, max_length);

        debug!(
            model = backend.model_name(),
            tier = tier.as_str(),
            input_len = input.len(),
            "invoking summarization backend"
        );

        match backend.summarize(&input, &params).await {
            Ok(output) => match output.candidates.first() {
                Some(candidate) => candidate.summary_text.clone(),
                None => format!("{output:?}"),
            },
            Err(e) => {
                warn!(error = %e, "summarization backend failed");
                format!("Summarization error: {e}")
            }
        }
    }
}

/// Truncate to the first `max_tokens` whitespace-delimited tokens.
///
/// Inputs at or under the cap pass through unchanged; truncated inputs are
/// re-joined with single spaces.
fn truncate_tokens(text: &str, max_tokens: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > max_tokens {
        words[..max_tokens].join(" ")
    } else {
        text.to_string()
    }
}
