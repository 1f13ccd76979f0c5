use chrono::{DateTime, Utc};
use verdict_core::errors::{InputError, ScoreError};
use verdict_core::models::{ReviewRecord, ReviewScores, ScoredReview};

use super::{fraction, net, wilson};
use crate::{age, votes};

/// Computes every derived field of a review.
///
/// The normal critical value depends only on the confidence level, so it
/// is resolved once here instead of once per review.
#[derive(Debug, Clone, Copy)]
pub struct ReviewScorer {
    confidence: f64,
    z: f64,
}

impl ReviewScorer {
    pub fn new(confidence: f64) -> Result<Self, ScoreError> {
        let z = wilson::critical_value(confidence)?;
        Ok(Self { confidence, z })
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// The two-sided normal critical value in use.
    pub fn critical_value(&self) -> f64 {
        self.z
    }

    /// Validate and score the review at batch position `index`, aging it
    /// against `reference`. This is the single validation point for records.
    pub fn score(
        &self,
        index: usize,
        record: &ReviewRecord,
        reference: DateTime<Utc>,
    ) -> Result<ScoredReview, InputError> {
        record.validate()?;
        let split = votes::VoteSplit::of_validated(record);

        let scores = ReviewScores {
            helpful_no: split.no,
            net_score: net::net_score(split.yes, split.no),
            positive_fraction: fraction::positive_fraction(split.yes, split.no),
            wilson_score: wilson::interval_with_z(split.yes, split.no, self.z).lower,
            age_days: age::age_days(reference, record.reviewed_at),
        };

        Ok(ScoredReview {
            index,
            record: record.clone(),
            scores,
        })
    }
}
