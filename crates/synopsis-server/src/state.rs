//! Server state management.

use std::sync::Arc;

use synopsis_core::Summarizer;
use synopsis_extractors::ExtractionOrchestrator;
use synopsis_llm::SummaryBackendFactory;
use tracing::{info, warn};

/// Shared application state.
///
/// Both pipeline halves are request-independent: the orchestrator holds no
/// per-request state and the summarization backend is stateless per call,
/// so a single instance of each is shared across workers.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ExtractionOrchestrator>,
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    /// Create application state from explicit components.
    pub fn new(orchestrator: Arc<ExtractionOrchestrator>, summarizer: Arc<Summarizer>) -> Self {
        Self {
            orchestrator,
            summarizer,
        }
    }

    /// Create application state from the environment.
    ///
    /// Extraction capabilities come from the compiled feature set; the
    /// summarization backend from `SYNOPSIS_SUMMARY_*` variables. A missing
    /// or misconfigured backend downgrades to the unavailability sentinel
    /// instead of refusing to start.
    pub fn from_env() -> Self {
        let orchestrator = Arc::new(ExtractionOrchestrator::with_defaults());

        let backend = match SummaryBackendFactory::from_env() {
            Ok(Some(backend)) => {
                info!(model = backend.model_name(), "summarization backend configured");
                Some(backend)
            }
            Ok(None) => {
                warn!("no summarization backend configured; summaries will be unavailable");
                None
            }
            Err(e) => {
                warn!(error = %e, "failed to configure summarization backend");
                None
            }
        };

        Self {
            orchestrator,
            summarizer: Arc::new(Summarizer::with_backend(backend)),
        }
    }

    /// Whether a summarization backend is configured.
    pub fn has_summary_backend(&self) -> bool {
        self.summarizer.is_available()
    }
}
