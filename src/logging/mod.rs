//! Logging setup.
//!
//! The helpers log through the `log` facade. Applications embedding them can
//! call [`setup_logging`] to install a terminal logger whose level is read from
//! the `LOG_LEVEL` environment variable.

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::env;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Parses a level name, falling back to `info`.
pub fn parse_log_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Installs a terminal logger. Returns false if a logger was already set.
pub fn setup_logging() -> bool {
    let level = env::var("LOG_LEVEL")
        .map(|level| parse_log_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Off)
        .build();

    TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_log_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_log_level("verbose"), LevelFilter::Info);
    }

    #[test]
    fn test_setup_logging_is_idempotent() {
        setup_logging();
        assert!(!setup_logging());
    }
}
