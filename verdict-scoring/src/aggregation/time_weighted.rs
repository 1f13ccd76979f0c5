//! Quartile-weighted mean rating.
//!
//! Reviews are split into four buckets at the 25th/50th/75th percentile of
//! age: `[0, q1]`, `(q1, q2]`, `(q2, q3]`, `(q3, max]`. The rating is
//! `Σ mean_i · w_i / 100`, newest bucket first. A bucket with no reviews
//! has no mean and contributes 0; this lowers the rating and is reported
//! through `BucketStats::mean_rating == None` and a warning.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use verdict_core::errors::AggregationError;
use verdict_core::models::{
    AgeBucket, AgeStats, BucketStats, ProductRatingSummary, RatingCount, ScoredReview,
};

use super::quantile;
use super::weights::BucketWeights;

/// Summarizes a scored batch into a [`ProductRatingSummary`].
#[derive(Debug, Clone, Default)]
pub struct TimeWeightedAggregator {
    weights: BucketWeights,
}

impl TimeWeightedAggregator {
    pub fn new(weights: BucketWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &BucketWeights {
        &self.weights
    }

    /// Summarize `reviews`, whose ages were measured against `reference_date`.
    ///
    /// Fails on an empty batch: quartiles are undefined and a 0 rating
    /// would be misleading.
    pub fn summarize(
        &self,
        reviews: &[ScoredReview],
        reference_date: DateTime<Utc>,
    ) -> Result<ProductRatingSummary, AggregationError> {
        let ages: Vec<f64> = reviews.iter().map(|r| r.scores.age_days as f64).collect();
        let quartiles = quantile::quartiles(&ages).ok_or(AggregationError::EmptyBatch)?;
        debug!(q1 = quartiles.q1, q2 = quartiles.q2, q3 = quartiles.q3, "age quartiles");

        let mut sums = [0.0f64; 4];
        let mut counts = [0usize; 4];
        for review in reviews {
            let slot = quartiles.bucket_for(review.scores.age_days as f64).ordinal();
            sums[slot] += review.record.overall;
            counts[slot] += 1;
        }

        let buckets = AgeBucket::ALL.map(|bucket| {
            let slot = bucket.ordinal();
            let mean_rating = (counts[slot] > 0).then(|| sums[slot] / counts[slot] as f64);
            if mean_rating.is_none() {
                warn!(%bucket, "empty age bucket contributes 0 to the weighted rating");
            }
            BucketStats {
                bucket,
                weight: self.weights.get(bucket),
                review_count: counts[slot],
                mean_rating,
            }
        });

        let means = buckets.map(|b| b.mean_rating);
        let weighted_rating = weighted_rating(&means, &self.weights);

        let review_count = reviews.len();
        let mean_rating =
            reviews.iter().map(|r| r.record.overall).sum::<f64>() / review_count as f64;

        Ok(ProductRatingSummary {
            review_count,
            reference_date,
            quartiles,
            buckets,
            weighted_rating,
            mean_rating,
            rating_distribution: rating_distribution(reviews),
            age_stats: age_stats(reviews, &ages),
        })
    }
}

/// `Σ mean_i · w_i / 100`, with an empty bucket (`None`) counting as 0.
pub fn weighted_rating(means: &[Option<f64>; 4], weights: &BucketWeights) -> f64 {
    AgeBucket::ALL
        .iter()
        .map(|&bucket| means[bucket.ordinal()].unwrap_or(0.0) * weights.get(bucket) / 100.0)
        .sum()
}

/// Count per distinct rating, ascending.
fn rating_distribution(reviews: &[ScoredReview]) -> Vec<RatingCount> {
    let mut ratings: Vec<f64> = reviews.iter().map(|r| r.record.overall).collect();
    ratings.sort_by(|a, b| a.total_cmp(b));

    let mut distribution: Vec<RatingCount> = Vec::new();
    for rating in ratings {
        match distribution.last_mut() {
            Some(last) if last.rating == rating => last.count += 1,
            _ => distribution.push(RatingCount { rating, count: 1 }),
        }
    }
    distribution
}

fn age_stats(reviews: &[ScoredReview], ages: &[f64]) -> AgeStats {
    let min = reviews.iter().map(|r| r.scores.age_days).min().unwrap_or(0);
    let max = reviews.iter().map(|r| r.scores.age_days).max().unwrap_or(0);
    let mean = if ages.is_empty() {
        0.0
    } else {
        ages.iter().sum::<f64>() / ages.len() as f64
    };
    AgeStats {
        min,
        max,
        mean,
        std_dev: quantile::sample_std_dev(ages),
    }
}
