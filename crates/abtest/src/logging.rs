//! Diagnostic logging setup for the command-line tool.
//!
//! Events go to stderr so stdout carries only the report.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `abtest=debug`.
pub const LOG_ENV: &str = "ABTEST_LOG";

/// Install the global fmt subscriber.
///
/// `ABTEST_LOG` wins when set; otherwise the level is `debug` when
/// `verbose`, else `warn`. Calling this twice is harmless.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
