//! Tracing setup for the calorie binaries.
//!
//! Results are printed on stdout, so log lines always go to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map a `-v` count to a default filter level.
///
/// Quiet by default (warnings only); each `-v` opens up one more level.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging from a `-v` count
pub fn init(verbosity: u8) {
    init_with_level(level_for_verbosity(verbosity))
}

/// Initialize logging with a specific default level
///
/// `RUST_LOG`, when set, takes precedence over `default_level`.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
