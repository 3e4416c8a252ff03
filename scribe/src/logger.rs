// scribe/src/logger.rs
//! `env_logger` bootstrap for the `scribe` binary.
//!
//! The default structured sink forwards to the `log` facade, so this is also
//! where the structured output of the CLI ends up (stderr).

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`, honouring `RUST_LOG` (default `warn`).
///
/// `level` overrides the global filter when given. Safe to call more than once;
/// later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp_millis();
    let _ = builder.try_init();
}
