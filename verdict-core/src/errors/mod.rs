//! Error handling for Verdict.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod aggregation_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod pipeline_error;
pub mod score_error;
pub mod source_error;

pub use aggregation_error::AggregationError;
pub use config_error::ConfigError;
pub use error_code::VerdictErrorCode;
pub use input_error::InputError;
pub use pipeline_error::PipelineError;
pub use score_error::ScoreError;
pub use source_error::SourceError;
