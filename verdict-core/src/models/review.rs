use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_VOTE_COUNT;
use crate::errors::InputError;

/// One user review as consumed by the scoring engine.
///
/// Records are immutable once loaded. Fields are public for literal
/// construction in fixtures; the pipeline re-validates every record it scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Star rating, usually 1..=5 but any positive real is accepted.
    pub overall: f64,
    /// When the review was posted.
    pub reviewed_at: DateTime<Utc>,
    /// Votes marking the review as helpful.
    pub helpful_yes: u64,
    /// All votes cast on the review. Never below `helpful_yes`.
    pub total_vote: u64,
}

impl ReviewRecord {
    /// Build a validated record.
    pub fn new(
        overall: f64,
        reviewed_at: DateTime<Utc>,
        helpful_yes: u64,
        total_vote: u64,
    ) -> Result<Self, InputError> {
        let record = Self {
            overall,
            reviewed_at,
            helpful_yes,
            total_vote,
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the record invariants: positive finite rating,
    /// `total_vote <= MAX_VOTE_COUNT` and `helpful_yes <= total_vote`.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.overall.is_finite() || self.overall <= 0.0 {
            return Err(InputError::InvalidRating {
                value: self.overall,
            });
        }
        if self.total_vote > MAX_VOTE_COUNT {
            return Err(InputError::VoteCountOutOfRange {
                total_vote: self.total_vote,
                max: MAX_VOTE_COUNT,
            });
        }
        if self.helpful_yes > self.total_vote {
            return Err(InputError::HelpfulExceedsTotal {
                helpful_yes: self.helpful_yes,
                total_vote: self.total_vote,
            });
        }
        Ok(())
    }
}

/// A review as a tabular loader yields it, before validation.
///
/// Vote counts are signed so that malformed rows surface as
/// [`InputError::NegativeVotes`] instead of wrapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReview {
    pub overall: f64,
    pub reviewed_at: DateTime<Utc>,
    pub helpful_yes: i64,
    pub total_vote: i64,
}

impl TryFrom<RawReview> for ReviewRecord {
    type Error = InputError;

    fn try_from(raw: RawReview) -> Result<Self, Self::Error> {
        let helpful_yes = non_negative("helpful_yes", raw.helpful_yes)?;
        let total_vote = non_negative("total_vote", raw.total_vote)?;
        ReviewRecord::new(raw.overall, raw.reviewed_at, helpful_yes, total_vote)
    }
}

fn non_negative(field: &'static str, value: i64) -> Result<u64, InputError> {
    u64::try_from(value).map_err(|_| InputError::NegativeVotes { field, value })
}
