/// Verdict version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default two-sided confidence level for the Wilson lower bound.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Default quartile bucket weights, newest bucket first. Read as percentages.
pub const DEFAULT_BUCKET_WEIGHTS: [f64; 4] = [28.0, 27.0, 23.0, 22.0];

/// Default length of the top-N ranked review listing.
pub const DEFAULT_TOP_N: usize = 20;

/// Per-record scoring runs on the calling thread unless enabled.
pub const DEFAULT_PARALLEL: bool = false;

/// Largest accepted vote count. Keeps every net score representable as `i64`.
pub const MAX_VOTE_COUNT: u64 = i64::MAX as u64;

/// Seconds in one day, used for review age.
pub const SECONDS_PER_DAY: i64 = 86_400;
