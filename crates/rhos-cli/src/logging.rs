//! Logging setup for the CLI.
//!
//! Events go to stderr so stdout carries nothing but CSV. The filter comes
//! from `RUST_LOG` when set, `warn` otherwise; `--verbose` forces `debug`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter directive used with `--verbose`.
pub const VERBOSE_FILTER: &str = "debug";

/// Build the event filter for the given verbosity.
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer)
        .try_init();
}
