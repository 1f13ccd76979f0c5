//! Display order of reviews.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use verdict_core::models::{ReviewScores, ScoredReview};

/// Score a ranking sorts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankKey {
    /// Wilson lower bound. The only volume-aware key.
    #[default]
    WilsonLowerBound,
    PositiveFraction,
    NetScore,
}

impl RankKey {
    pub fn value(self, scores: &ReviewScores) -> f64 {
        match self {
            Self::WilsonLowerBound => scores.wilson_score,
            Self::PositiveFraction => scores.positive_fraction,
            Self::NetScore => scores.net_score as f64,
        }
    }
}

/// Positions into `reviews`, best first.
///
/// The sort is stable: equal scores keep their batch order, so identical
/// input always ranks identically.
pub fn rank(reviews: &[ScoredReview], key: RankKey) -> Vec<usize> {
    let mut order: Vec<usize> = (0..reviews.len()).collect();
    order.sort_by(|&a, &b| {
        let left = key.value(&reviews[a].scores);
        let right = key.value(&reviews[b].scores);
        right.partial_cmp(&left).unwrap_or(Ordering::Equal)
    });
    order
}
