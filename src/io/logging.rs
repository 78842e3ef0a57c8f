//! Diagnostic logging to stderr

use crate::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is unset
pub const fn default_filter(quiet: bool) -> &'static str {
    if quiet {
        QUIET_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Install the global subscriber; `RUST_LOG` overrides the default filter
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
