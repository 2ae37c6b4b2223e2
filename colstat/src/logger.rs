// colstat/src/logger.rs
//! Logging setup for the `colstat` binary and its tests.
//!
//! All log output goes to stderr so stdout carries only the report.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::io::Write;

/// Level used when neither a flag nor `RUST_LOG` asks for something else.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initializes the global logger.
///
/// An explicit `level` overrides `RUST_LOG`. Calling this more than once is
/// harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_LEVEL));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        });

    let _ = builder.try_init();
}

/// Maps the `--quiet` / `--debug` flags to an explicit level, if any.
pub fn level_from_flags(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(level_from_flags(true, true), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false), None);
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logger(Some(LevelFilter::Debug));
        init_logger(None);
        log::debug!("logger initialized twice");
    }
}
