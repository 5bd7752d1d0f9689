//! Console and file logging setup.

use crate::config::LoggingSettings;
use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber from the logging settings.
///
/// Writes to the console and appends to the configured log file. Call once
/// at process start; library code only emits `tracing` events and never
/// touches the subscriber.
pub fn init(settings: &LoggingSettings) -> Result<()> {
    if !settings.enabled {
        return Ok(());
    }

    let filter = EnvFilter::try_new(settings.level.to_lowercase())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.file)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        .try_init()
        .map_err(|e| Error::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logging_is_noop() {
        let settings = LoggingSettings {
            enabled: false,
            ..LoggingSettings::default()
        };
        assert!(init(&settings).is_ok());
    }
}
