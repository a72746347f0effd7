//! Log file setup.
//!
//! The terminal belongs to the dashboard, so events only go to a file, and
//! only when one is configured. The filter comes from `RUST_LOG` when set,
//! otherwise from the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::settings::LoggingSettings;

/// Filter for a configured level, overridden by `RUST_LOG`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber. Returns `false` when no log file is set.
pub fn init_logging(settings: &LoggingSettings) -> Result<bool> {
    let Some(path) = &settings.file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter(&settings.level))
        .with(file_layer)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_means_no_subscriber() {
        let settings = LoggingSettings::default();
        assert!(!init_logging(&settings).unwrap());
    }

    #[test]
    fn test_unwritable_log_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let settings = LoggingSettings {
            file: Some(dir.path().join("missing").join("moana.log")),
            level: "debug".to_string(),
        };
        assert!(init_logging(&settings).is_err());
    }
}
