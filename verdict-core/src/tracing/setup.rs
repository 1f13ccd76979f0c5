//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Filter used when `VERDICT_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "verdict_core=info,verdict_scoring=info";

/// Initialize the Verdict tracing/logging system.
///
/// Reads the `VERDICT_LOG` environment variable for per-crate log levels.
/// Format: `VERDICT_LOG=verdict_scoring=debug,verdict_core=warn`
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("VERDICT_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();

        // A host application may already own the global subscriber.
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
