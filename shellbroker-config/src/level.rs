//! Server log verbosity.

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

/// Verbosity accepted by the `log-level` key.
///
/// Plain configuration data: the process bootstrap converts it and
/// hands it to the logging subsystem, rather than downstream code
/// reading an ambient global level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}
