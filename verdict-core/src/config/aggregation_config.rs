//! Time-weighted aggregation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the quartile-weighted product rating.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AggregationConfig {
    /// Bucket weights as percentages, newest bucket first.
    /// Default: `[28, 27, 23, 22]`. Need not sum to 100.
    pub bucket_weights: Option<[f64; 4]>,
}

impl AggregationConfig {
    /// Returns the effective bucket weights.
    pub fn effective_bucket_weights(&self) -> [f64; 4] {
        self.bucket_weights
            .unwrap_or(constants::DEFAULT_BUCKET_WEIGHTS)
    }
}
