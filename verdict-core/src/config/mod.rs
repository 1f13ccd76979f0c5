//! Configuration system for Verdict.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod aggregation_config;
pub mod scoring_config;
pub mod verdict_config;

pub use aggregation_config::AggregationConfig;
pub use scoring_config::ScoringConfig;
pub use verdict_config::{ConfigOverrides, VerdictConfig};
