use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Directory for `file`, relative to the config directory
    pub dir: String,
    /// Log to this file instead of stdout
    pub file: Option<String>,
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: true,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(file) = &self.file
            && (file.trim().is_empty() || file.contains(".."))
        {
            return Err(ConfigError::invalid(
                "logging",
                "logging.file must be a plain file name",
            ));
        }
        Ok(())
    }
}
