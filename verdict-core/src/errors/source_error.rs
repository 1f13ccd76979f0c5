//! Review source errors.

use super::error_code::{self, VerdictErrorCode};

/// A review source could not produce its batch.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("review source unavailable: {message}")]
    Unavailable { message: String },
}

impl VerdictErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        error_code::SOURCE_ERROR
    }
}
