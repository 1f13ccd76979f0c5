//! # verdict-core
//!
//! Foundation crate for the Verdict review scoring engine.
//! Defines the review data model, errors, config, tracing, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VerdictConfig;
pub use errors::{PipelineError, VerdictErrorCode};
pub use models::{ProductRatingSummary, RawReview, ReviewRecord, ReviewScores, ScoredReview};
