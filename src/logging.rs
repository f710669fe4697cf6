// src/logging.rs
// =============================================================================
// Sets up the tracing subscriber from the --log flag.
//
// debug and error records carry the source file and line, info and warn
// records do not. Anything other than the four known names is treated
// as info.
// =============================================================================

use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }

    fn max_level(self) -> Level {
        match self {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }

    fn shows_source(self) -> bool {
        matches!(self, LogLevel::Debug | LogLevel::Error)
    }
}

pub fn init(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(level.max_level())
        .with_target(false)
        .with_file(level.shows_source())
        .with_line_number(level.shows_source())
        .init();
}
