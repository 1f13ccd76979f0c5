//! Review data model: input records, derived scores, and the batch summary.

pub mod review;
pub mod scored;
pub mod summary;

pub use review::{RawReview, ReviewRecord};
pub use scored::{ReviewScores, ScoredReview};
pub use summary::{AgeBucket, AgeQuartiles, AgeStats, BucketStats, ProductRatingSummary, RatingCount};
