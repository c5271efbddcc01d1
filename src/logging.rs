// src/logging.rs
//! Diagnostic logging to stderr. Report output never goes through here.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a filter directive, e.g. `DESLOP_LOG=debug`.
pub const LOG_ENV: &str = "DESLOP_LOG";

/// Installs the global subscriber. `--verbose` overrides the environment.
/// Calling it twice is harmless.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();

    tracing::debug!(verbose, "logging initialized");
}
