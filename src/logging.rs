//! Logging setup for the command-line tool.
//!
//! Log lines go to stderr so answers on stdout stay machine-readable. The
//! level comes from `RUST_LOG` when set, defaulting to `info`; `--verbose`
//! forces `debug`.

use std::io;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Filter used with `--verbose`.
pub const VERBOSE_FILTER: &str = "debug";

/// Build the filter for the given verbosity.
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
}
