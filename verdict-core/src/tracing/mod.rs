//! Observability for Verdict.
//! `tracing` crate with `EnvFilter`, per-crate log levels.

pub mod setup;

pub use setup::init_tracing;
