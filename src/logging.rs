//! Tracing/logging initialization.
//!
//! Log lines go to stderr so they never mix with the menu on stdout.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive from the configured level and `-v` count
fn filter_directive(configured: &str, verbosity: u8) -> &str {
    match verbosity {
        0 => configured,
        1 => "info",
        _ => "debug",
    }
}

/// Initialize tracing for the process.
///
/// `RUST_LOG` wins over both arguments. Safe to call more than once;
/// later calls are no-ops.
pub fn init(configured: &str, verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(configured, verbosity)))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
