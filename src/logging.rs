//! Log setup for the command-line tool.
//!
//! Reads the `SEQSNIFF_LOG` environment variable for filtering, e.g.
//! `SEQSNIFF_LOG=seqsniff=debug`. Logs go to stderr so that exported
//! sequences on stdout stay clean.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SEQSNIFF_LOG";

static INIT: Once = Once::new();

/// Installs the global subscriber. Calling it again has no effect.
///
/// `verbose` lowers the default level to `debug` when `SEQSNIFF_LOG` is
/// not set.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let default = if verbose { "seqsniff=debug" } else { "seqsniff=warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
