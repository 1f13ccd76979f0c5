//! Scoring configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for per-review scoring and ranking.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Two-sided confidence level for the Wilson lower bound. Default: 0.95.
    pub confidence: Option<f64>,
    /// Number of reviews in the top-N listing. Default: 20.
    pub top_n: Option<usize>,
    /// Score records on the rayon thread pool. Default: false.
    pub parallel: Option<bool>,
}

impl ScoringConfig {
    /// Returns the effective confidence level, defaulting to 0.95.
    pub fn effective_confidence(&self) -> f64 {
        self.confidence.unwrap_or(constants::DEFAULT_CONFIDENCE)
    }

    /// Returns the effective top-N length, defaulting to 20.
    pub fn effective_top_n(&self) -> usize {
        self.top_n.unwrap_or(constants::DEFAULT_TOP_N)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(constants::DEFAULT_PARALLEL)
    }
}
