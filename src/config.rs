//! File-based configuration with defaults.
//!
//! Configuration is read from a JSON document with two sections:
//!
//! ```json
//! {
//!   "download": {
//!     "chunk_size": 32768,
//!     "max_retries": 3,
//!     "retry_delay": 1,
//!     "timeout": 300,
//!     "max_concurrent": 10
//!   },
//!   "logging": { "enabled": true, "level": "info", "file": "download.log" }
//! }
//! ```
//!
//! Every field is individually defaulted, so a partial document is accepted.
//! A missing or malformed file is not fatal either; callers fall back to
//! [`AppConfig::default`].

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Download engine settings.
    pub download: DownloadSettings,
    /// Logging sink settings.
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Settings for the download engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DownloadSettings {
    /// Write buffer size in bytes for streaming chunks to disk.
    pub chunk_size: usize,
    /// Maximum number of attempts per file, including the first.
    pub max_retries: u32,
    /// Delay in seconds between attempts.
    pub retry_delay: f64,
    /// Whole-request deadline in seconds.
    pub timeout: f64,
    /// Maximum number of simultaneous transfers.
    pub max_concurrent: usize,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        Self {
            chunk_size: 32_768,
            max_retries: 3,
            retry_delay: 1.0,
            timeout: 300.0,
            max_concurrent: 10,
        }
    }
}

impl DownloadSettings {
    /// Delay between attempts as a [`Duration`].
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs_f64(self.retry_delay)
    }

    /// Whole-request deadline as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout)
    }
}

/// Settings for the logging sinks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Disable all logging output when false.
    pub enabled: bool,
    /// Log level filter ("trace" through "error").
    pub level: String,
    /// Path of the log file.
    pub file: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".into(),
            file: "download.log".into(),
        }
    }
}
