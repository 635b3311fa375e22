//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub(crate) const LOG_ENV: &str = "GAK_LOG";

/// Install the stderr subscriber.
///
/// `GAK_LOG` wins when set; otherwise each `-v` raises the level from the
/// default of `warn`.
pub(crate) fn init(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
