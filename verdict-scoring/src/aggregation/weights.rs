use serde::{Deserialize, Serialize};
use verdict_core::constants::DEFAULT_BUCKET_WEIGHTS;
use verdict_core::errors::AggregationError;
use verdict_core::models::AgeBucket;

/// Percentage weights of the four age buckets, newest first.
///
/// Each weight is divided by 100 when applied. The weights are not required
/// to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketWeights([f64; 4]);

impl BucketWeights {
    pub fn new(weights: [f64; 4]) -> Result<Self, AggregationError> {
        for (bucket, &value) in weights.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(AggregationError::InvalidWeight { bucket, value });
            }
        }
        Ok(Self(weights))
    }

    pub fn get(&self, bucket: AgeBucket) -> f64 {
        self.0[bucket.ordinal()]
    }

    pub fn as_array(&self) -> [f64; 4] {
        self.0
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Default for BucketWeights {
    fn default() -> Self {
        Self(DEFAULT_BUCKET_WEIGHTS)
    }
}
