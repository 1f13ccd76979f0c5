//! Review age relative to the newest review in the batch.
//!
//! "Now" is the batch's maximum timestamp, never wall-clock time, so
//! re-running on the same data always yields the same ages.

use chrono::{DateTime, Utc};
use verdict_core::constants::SECONDS_PER_DAY;
use verdict_core::models::ReviewRecord;

/// Newest review timestamp, `None` for an empty batch.
pub fn reference_date(records: &[ReviewRecord]) -> Option<DateTime<Utc>> {
    records.iter().map(|r| r.reviewed_at).max()
}

/// Whole days from `reviewed_at` to `reference`, rounded down.
pub fn age_days(reference: DateTime<Utc>, reviewed_at: DateTime<Utc>) -> i64 {
    (reference - reviewed_at)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
}
