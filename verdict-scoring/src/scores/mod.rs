//! Per-review score calculators. All pure; no record depends on another.

pub mod fraction;
pub mod net;
pub mod scorer;
pub mod wilson;

pub use fraction::positive_fraction;
pub use net::net_score;
pub use scorer::ReviewScorer;
pub use wilson::{lower_bound as wilson_lower_bound, WilsonInterval};
