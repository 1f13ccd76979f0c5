//! Pipeline errors.

use super::error_code::VerdictErrorCode;
use super::{AggregationError, ConfigError, InputError, ScoreError, SourceError};

/// Errors that can occur during a scoring run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Invalid review at index {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: InputError,
    },

    #[error("Score error: {0}")]
    Score(#[from] ScoreError),

    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

impl PipelineError {
    /// Attach the batch position to a record validation failure.
    pub fn at(index: usize, source: InputError) -> Self {
        Self::InvalidRecord { index, source }
    }
}

impl VerdictErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRecord { source, .. } => source.error_code(),
            Self::Score(e) => e.error_code(),
            Self::Aggregation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Source(e) => e.error_code(),
        }
    }
}
