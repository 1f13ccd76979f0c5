//! Review record validation errors.

use super::error_code::{self, VerdictErrorCode};

/// A review record that cannot be scored. Always fatal: records are never
/// clamped or repaired.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("negative vote count for {field}: {value}")]
    NegativeVotes { field: &'static str, value: i64 },

    #[error("helpful_yes ({helpful_yes}) exceeds total_vote ({total_vote})")]
    HelpfulExceedsTotal { helpful_yes: u64, total_vote: u64 },

    #[error("total_vote {total_vote} exceeds the maximum of {max}")]
    VoteCountOutOfRange { total_vote: u64, max: u64 },

    #[error("rating must be a positive finite number, got {value}")]
    InvalidRating { value: f64 },
}

impl VerdictErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
