//! Time-weighted aggregation errors.

use super::error_code::{self, VerdictErrorCode};

/// Errors raised while summarizing a review batch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregationError {
    #[error("cannot aggregate an empty review batch")]
    EmptyBatch,

    #[error("bucket weight {bucket} must be a non-negative finite number, got {value}")]
    InvalidWeight { bucket: usize, value: f64 },
}

impl VerdictErrorCode for AggregationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyBatch => error_code::EMPTY_BATCH,
            Self::InvalidWeight { .. } => error_code::AGGREGATION_ERROR,
        }
    }
}
