//! Tracing subscriber setup.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global subscriber. `RUST_LOG` overrides `level`.
///
/// Logs go to stderr so stdout stays free for machine-readable output.
pub fn init_tracing(level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init()
        .ok();
}

/// Log level for the given verbosity.
pub fn level_for(verbose: bool) -> Level {
    if verbose { Level::DEBUG } else { Level::INFO }
}
