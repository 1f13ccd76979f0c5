//! Score calculator errors.

use super::error_code::{self, VerdictErrorCode};

/// Errors raised at the score calculator boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("confidence must lie strictly between 0 and 1, got {value}")]
    InvalidConfidence { value: f64 },

    #[error("normal distribution unavailable: {message}")]
    Distribution { message: String },
}

impl VerdictErrorCode for ScoreError {
    fn error_code(&self) -> &'static str {
        error_code::SCORE_ERROR
    }
}
