//! Configuration data model and validation

use crate::error::{AppError, Result};
use crate::logging::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Location of the metrics document to analyse
    #[serde(default)]
    pub input_path: PathBuf,

    /// Enable colored diagnostics on stderr
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,

    /// Explicit log level; derived from `verbose`/`debug` when unset
    #[serde(default)]
    pub log_level: Option<LogLevel>,

    /// Explicit log format; derived from `debug` when unset
    #[serde(default)]
    pub log_format: Option<LogFormat>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
            log_level: None,
            log_format: None,
        }
    }
}

impl Config {
    /// Create a configuration for the given input file with default settings
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(AppError::config("Input path cannot be empty"));
        }

        Ok(())
    }

    /// Minimum level the diagnostics logger will emit
    pub fn effective_log_level(&self) -> LogLevel {
        if let Some(level) = self.log_level {
            level
        } else if self.debug {
            LogLevel::Debug
        } else if self.verbose {
            LogLevel::Info
        } else {
            LogLevel::Warn
        }
    }

    /// Output format the diagnostics logger will use
    pub fn effective_log_format(&self) -> LogFormat {
        match self.log_format {
            Some(format) => format,
            None if self.debug => LogFormat::Json,
            None => LogFormat::Console,
        }
    }

    /// Load configuration overrides from environment variables
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(level) = std::env::var("ANALYSER_LOG_LEVEL") {
            self.log_level = Some(level.parse()
                .map_err(|_: AppError| AppError::config(format!("Invalid ANALYSER_LOG_LEVEL value '{}'", level)))?);
        }

        if let Ok(format) = std::env::var("ANALYSER_LOG_FORMAT") {
            self.log_format = Some(format.parse()
                .map_err(|_: AppError| AppError::config(format!("Invalid ANALYSER_LOG_FORMAT value '{}'", format)))?);
        }

        if let Ok(enable_color) = std::env::var("ANALYSER_ENABLE_COLOR") {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid ANALYSER_ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        // https://no-color.org: presence alone disables colour
        if std::env::var_os("NO_COLOR").is_some() {
            self.enable_color = false;
        }

        Ok(())
    }
}

fn default_enable_color() -> bool {
    true
}
