//! # verdict-scoring
//!
//! Review scoring engine. Per review: vote decomposition, net score,
//! positive fraction, and the Wilson lower bound. Per batch: the
//! quartile-weighted product rating and the display ranking.

pub mod age;
pub mod aggregation;
pub mod pipeline;
pub mod ranking;
pub mod scores;
pub mod votes;

pub use aggregation::{BucketWeights, TimeWeightedAggregator};
pub use pipeline::{ScoringPipeline, ScoringReport};
pub use ranking::RankKey;
pub use scores::ReviewScorer;
