//! Seams to the collaborators around the engine.

pub mod review_source;

pub use review_source::ReviewSource;
