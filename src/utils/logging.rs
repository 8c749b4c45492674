//! Logging utilities
//!
//! Provides logging setup and configuration.

use log::LevelFilter;

/// Setup logging for the command line tool
///
/// Defaults to `warn` so that a plain run prints only the result; `RUST_LOG`
/// overrides the level.
pub fn setup_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}
