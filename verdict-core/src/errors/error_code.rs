//! VerdictErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable, machine-readable
/// code alongside its human-readable message.
pub trait VerdictErrorCode {
    /// Returns the error code string (e.g., "INPUT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const SCORE_ERROR: &str = "SCORE_ERROR";
pub const EMPTY_BATCH: &str = "EMPTY_BATCH";
pub const AGGREGATION_ERROR: &str = "AGGREGATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SOURCE_ERROR: &str = "SOURCE_ERROR";
