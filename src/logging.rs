//! Tracing setup for the worker and the CLI front end.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Logs go to stderr so they never mix with result output on stdout. The
/// `TOOLSCOUT_LOG` environment variable selects the filter; the default only
/// surfaces warnings.
pub fn initialize() {
    let filter = EnvFilter::try_from_env("TOOLSCOUT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
