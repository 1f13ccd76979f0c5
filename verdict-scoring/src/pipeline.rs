//! Batch scoring pipeline.
//!
//! 1. Reference date = newest review
//! 2. Per-record validation and scores (optionally fanned out over rayon);
//!    the lowest-index bad record aborts the run
//! 3. Quartile-weighted product summary
//! 4. Stable ranking

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use verdict_core::config::VerdictConfig;
use verdict_core::errors::{AggregationError, PipelineError};
use verdict_core::models::{ProductRatingSummary, ReviewRecord, ScoredReview};
use verdict_core::traits::ReviewSource;

use crate::age;
use crate::aggregation::{BucketWeights, TimeWeightedAggregator};
use crate::ranking::{self, RankKey};
use crate::scores::ReviewScorer;

/// Everything one run derives from a review batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringReport {
    pub reference_date: DateTime<Utc>,
    /// Scored reviews in batch order.
    pub reviews: Vec<ScoredReview>,
    /// Positions into `reviews`, best first.
    pub ranking: Vec<usize>,
    pub summary: ProductRatingSummary,
    /// Configured length of the top listing.
    pub top_n: usize,
}

impl ScoringReport {
    /// All reviews in ranked order.
    pub fn ranked(&self) -> impl Iterator<Item = &ScoredReview> + '_ {
        self.ranking.iter().map(|&i| &self.reviews[i])
    }

    /// The first `n` ranked reviews.
    pub fn top_n(&self, n: usize) -> Vec<&ScoredReview> {
        self.ranked().take(n).collect()
    }

    /// The configured top listing.
    pub fn top(&self) -> Vec<&ScoredReview> {
        self.top_n(self.top_n)
    }
}

/// Scores a fixed batch of reviews from scratch. Holds no state between runs.
#[derive(Debug, Clone)]
pub struct ScoringPipeline {
    scorer: ReviewScorer,
    aggregator: TimeWeightedAggregator,
    rank_key: RankKey,
    top_n: usize,
    parallel: bool,
}

impl ScoringPipeline {
    /// Build a pipeline from resolved configuration.
    pub fn new(config: &VerdictConfig) -> Result<Self, PipelineError> {
        VerdictConfig::validate(config)?;
        let scorer = ReviewScorer::new(config.scoring.effective_confidence())?;
        let weights = BucketWeights::new(config.aggregation.effective_bucket_weights())?;
        Ok(Self {
            scorer,
            aggregator: TimeWeightedAggregator::new(weights),
            rank_key: RankKey::default(),
            top_n: config.scoring.effective_top_n(),
            parallel: config.scoring.effective_parallel(),
        })
    }

    /// Build a pipeline with compiled defaults.
    pub fn with_defaults() -> Result<Self, PipelineError> {
        Self::new(&VerdictConfig::default())
    }

    /// Rank on a different score. Wilson lower bound unless changed.
    pub fn with_rank_key(mut self, rank_key: RankKey) -> Self {
        self.rank_key = rank_key;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn scorer(&self) -> &ReviewScorer {
        &self.scorer
    }

    /// Validate, convert, and score every review a source yields.
    pub fn run_source<S: ReviewSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<ScoringReport, PipelineError> {
        let records = source
            .reviews()?
            .into_iter()
            .enumerate()
            .map(|(index, raw)| ReviewRecord::try_from(raw).map_err(|e| PipelineError::at(index, e)))
            .collect::<Result<Vec<_>, _>>()?;
        self.run(&records)
    }

    /// Run the full pipeline over `records`.
    pub fn run(&self, records: &[ReviewRecord]) -> Result<ScoringReport, PipelineError> {
        info!(
            reviews = records.len(),
            confidence = self.scorer.confidence(),
            parallel = self.parallel,
            "scoring run started"
        );

        let reference_date = age::reference_date(records).ok_or(AggregationError::EmptyBatch)?;
        let reviews = self.score_batch(records, reference_date)?;
        let summary = self.aggregator.summarize(&reviews, reference_date)?;

        let ranking = ranking::rank(&reviews, self.rank_key);
        debug!(key = ?self.rank_key, ranked = ranking.len(), "ranking complete");

        info!(
            reviews = reviews.len(),
            weighted_rating = summary.weighted_rating,
            mean_rating = summary.mean_rating,
            "scoring run complete"
        );

        Ok(ScoringReport {
            reference_date,
            reviews,
            ranking,
            summary,
            top_n: self.top_n,
        })
    }

    /// Score every record against `reference_date`, keeping batch order.
    ///
    /// Fails with the first invalid record in batch order, also when scoring
    /// in parallel.
    pub fn score_batch(
        &self,
        records: &[ReviewRecord],
        reference_date: DateTime<Utc>,
    ) -> Result<Vec<ScoredReview>, PipelineError> {
        let score = |(index, record): (usize, &ReviewRecord)| {
            self.scorer
                .score(index, record, reference_date)
                .map_err(|e| PipelineError::at(index, e))
        };

        if self.parallel {
            let scored: Vec<Result<ScoredReview, PipelineError>> =
                records.par_iter().enumerate().map(score).collect();
            scored.into_iter().collect()
        } else {
            records.iter().enumerate().map(score).collect()
        }
    }
}
