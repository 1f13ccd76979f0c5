use serde::{Deserialize, Serialize};

use super::review::ReviewRecord;

/// Per-review values derived by the scoring pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReviewScores {
    /// `total_vote - helpful_yes`.
    pub helpful_no: u64,
    /// `helpful_yes - helpful_no`. Auxiliary only, never used for ranking.
    pub net_score: i64,
    /// `helpful_yes / total_vote`, or 0 for a review without votes.
    pub positive_fraction: f64,
    /// Wilson score interval lower bound, in [0, 1].
    pub wilson_score: f64,
    /// Whole days between the review and the newest review in the batch.
    pub age_days: i64,
}

/// A review joined with its derived scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredReview {
    /// Position of the record in the input batch.
    pub index: usize,
    pub record: ReviewRecord,
    pub scores: ReviewScores,
}
