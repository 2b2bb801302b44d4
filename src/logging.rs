//! Log output of the command-line tools.
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::config;

/// Installs the global subscriber. Events go to stderr, so stdout only
/// carries the designed coefficients.
///
/// `RUST_LOG` directives take over completely when set. Otherwise the level
/// comes from the configuration.
pub fn init() {
    let format = fmt::layer()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(true)
        .compact();

    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(directives.as_deref(), config::config().log_level);

    if tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .try_init()
        .is_err()
    {
        debug!("logger already initialized");
    }
}

// malformed directives fall back to the configured level
fn env_filter(directives: Option<&str>, level: LevelFilter) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(level.to_string()))
}
