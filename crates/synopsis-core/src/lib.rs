//! synopsis-core - Core library for synopsis.
//!
//! This crate provides the shared types, the `SummaryBackend` trait, and the
//! `Summarizer` engine used by the synopsis document summarization service.
//!
//! # Example
//!
//! ```ignore
//! use synopsis_core::{LengthTier, Summarizer};
//!
//! let summarizer = Summarizer::new(backend);
//! let summary = summarizer.summarize("Extracted document text...", LengthTier::Short).await;
//! ```

pub mod config;
pub mod error;
pub mod summarize;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{BackendConfig, BackendProvider, SummaryConfig};
pub use error::{SynopsisError, SynopsisResult};
pub use summarize::{Summarizer, MAX_INPUT_TOKENS, UNAVAILABLE_MESSAGE};
pub use traits::{BackendOutput, SummaryBackend, SummaryCandidate, SummaryParams};
pub use types::LengthTier;
