//! Time-decayed product rating: quartile buckets over review age, weighted
//! bucket means, and descriptive statistics of the batch.

pub mod quantile;
pub mod time_weighted;
pub mod weights;

pub use time_weighted::{weighted_rating, TimeWeightedAggregator};
pub use weights::BucketWeights;
