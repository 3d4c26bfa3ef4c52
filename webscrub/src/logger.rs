// webscrub/src/logger.rs
//! Logger setup for the CLI binary.

use env_logger::Builder;
use log::LevelFilter;

/// Initializes `env_logger` with the given level filter.
///
/// `RUST_LOG` still wins when set, so developers can raise verbosity on a
/// per-module basis without touching the CLI flags. Safe to call more than
/// once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).try_init().ok();
}
