//! Core traits for synopsis.

mod backend;

pub use backend::{BackendOutput, SummaryBackend, SummaryCandidate, SummaryParams};
