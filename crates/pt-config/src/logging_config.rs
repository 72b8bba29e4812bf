use crate::LogLevel;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log file name. None = stdout.
    pub file: Option<String>,
    /// Directory for log files, relative to the config directory.
    pub dir: String,
    /// Colored output when logging to a TTY.
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            file: None,
            dir: "logs".to_string(),
            colored: true,
        }
    }
}
