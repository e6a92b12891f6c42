use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `BUFRING_LOG=debug`.
pub const LOG_ENV: &str = "BUFRING_LOG";

/// Install the global subscriber. Logs go to stderr, filtered by
/// `BUFRING_LOG` (default `warn`). With `quiet` set and no filter in the
/// environment, logs are discarded.
pub fn init(quiet: bool) {
    let configured = std::env::var(LOG_ENV).is_ok();
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    if quiet && !configured {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    }
}
