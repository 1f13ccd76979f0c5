use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the four age partitions of a review batch, newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBucket {
    /// `age <= q1`
    Newest,
    /// `q1 < age <= q2`
    Recent,
    /// `q2 < age <= q3`
    Older,
    /// `age > q3`
    Oldest,
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 4] = [Self::Newest, Self::Recent, Self::Older, Self::Oldest];

    /// Position of the bucket, 0 for the newest.
    pub fn ordinal(self) -> usize {
        match self {
            Self::Newest => 0,
            Self::Recent => 1,
            Self::Older => 2,
            Self::Oldest => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Recent => "recent",
            Self::Older => "older",
            Self::Oldest => "oldest",
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 25th, 50th and 75th percentile of review age in days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeQuartiles {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
}

impl AgeQuartiles {
    /// Bucket an age falls into. Boundaries are inclusive on the upper side.
    pub fn bucket_for(&self, age_days: f64) -> AgeBucket {
        if age_days <= self.q1 {
            AgeBucket::Newest
        } else if age_days <= self.q2 {
            AgeBucket::Recent
        } else if age_days <= self.q3 {
            AgeBucket::Older
        } else {
            AgeBucket::Oldest
        }
    }
}

/// Statistics of one age bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketStats {
    pub bucket: AgeBucket,
    /// Weight as a percentage, divided by 100 when applied.
    pub weight: f64,
    pub review_count: usize,
    /// Mean rating, `None` when the bucket is empty. An empty bucket
    /// contributes 0 to the weighted rating.
    pub mean_rating: Option<f64>,
}

impl BucketStats {
    /// This bucket's share of the weighted rating.
    pub fn contribution(&self) -> f64 {
        self.mean_rating.unwrap_or(0.0) * self.weight / 100.0
    }
}

/// How many reviews carry a given rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingCount {
    pub rating: f64,
    pub count: usize,
}

/// Descriptive statistics of review age in days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeStats {
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    /// Sample standard deviation (n - 1). `None` below two reviews.
    pub std_dev: Option<f64>,
}

/// Product-level rating summary, recomputed from scratch on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRatingSummary {
    pub review_count: usize,
    /// Newest review timestamp; every age is measured from here.
    pub reference_date: DateTime<Utc>,
    pub quartiles: AgeQuartiles,
    /// Buckets ordered newest first.
    pub buckets: [BucketStats; 4],
    /// Time-decayed aggregate rating.
    pub weighted_rating: f64,
    /// Plain arithmetic mean of all ratings.
    pub mean_rating: f64,
    /// Count per distinct rating, ascending by rating.
    pub rating_distribution: Vec<RatingCount>,
    pub age_stats: AgeStats,
}

impl ProductRatingSummary {
    /// Buckets that received no reviews.
    pub fn empty_buckets(&self) -> impl Iterator<Item = AgeBucket> + '_ {
        self.buckets
            .iter()
            .filter(|b| b.mean_rating.is_none())
            .map(|b| b.bucket)
    }
}
