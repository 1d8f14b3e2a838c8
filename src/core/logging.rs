//! Logging setup using tracing-subscriber
//!
//! `RUST_LOG` takes precedence; otherwise only warnings are shown, or
//! debug output for this crate with `--verbose`. Logs go to stderr so they
//! never mix with quote output.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init(verbose: bool) {
    let default = if verbose { "tubesc=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// Verbose logging for tests, captured by the test harness
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("tubesc=trace"))
        .with_test_writer()
        .try_init();
}
