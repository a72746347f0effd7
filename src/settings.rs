//! Layered configuration: TOML file, then `MOANA__*` environment variables,
//! then command-line flags.
//!
//! ```toml
//! [reveal]
//! map = "1500ms"
//! widgets = "2.2s"
//! charts = "3000"     # bare numbers are milliseconds
//!
//! [ui]
//! theme = "auto"      # auto | dark | light
//! tick_ms = 80
//!
//! [logging]
//! file = "moana.log"
//! level = "debug"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use ::config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use moana_types::Region;

use crate::data::duration::parse_delay;
use crate::reveal::RevealDelays;

/// Config file read when `--config` is not given. Missing is fine.
pub const DEFAULT_CONFIG_FILE: &str = "moana.toml";

/// Prefix for environment overrides, e.g. `MOANA__REVEAL__MAP=2s`.
pub const ENV_PREFIX: &str = "MOANA";

/// Errors raised while assembling [`Settings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file or environment could not be read or did not match the schema.
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    /// A reveal delay did not parse.
    #[error("invalid {region} delay {value:?}: {reason}")]
    InvalidDelay {
        region: Region,
        value: String,
        reason: String,
    },
}

/// Which color theme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Pick from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub theme: ThemeChoice,
    /// Redraw interval while idle, milliseconds.
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Auto,
            tick_ms: 80,
        }
    }
}

impl UiSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log destination. Nothing is logged when unset: stdout belongs to the TUI.
    pub file: Option<PathBuf>,
    /// Default filter when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawReveal {
    map: Option<String>,
    widgets: Option<String>,
    charts: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    reveal: RawReveal,
    ui: UiSettings,
    logging: LoggingSettings,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub delays: RevealDelays,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load from `path` (required) or [`DEFAULT_CONFIG_FILE`] (optional),
    /// then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let raw: RawSettings = Config::builder()
            .add_source(File::from(file).required(path.is_some()))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        let mut settings = Self {
            delays: RevealDelays::default(),
            ui: raw.ui,
            logging: raw.logging,
        };
        let configured = [
            (Region::Map, raw.reveal.map),
            (Region::Widgets, raw.reveal.widgets),
            (Region::Charts, raw.reveal.charts),
        ];
        for (region, value) in configured {
            if let Some(value) = value {
                settings.override_delay(region, &value)?;
            }
        }
        Ok(settings)
    }

    /// Replace one region's delay with a parsed duration string.
    pub fn override_delay(&mut self, region: Region, value: &str) -> Result<(), SettingsError> {
        let delay = parse_delay(value).map_err(|e| SettingsError::InvalidDelay {
            region,
            value: value.to_string(),
            reason: e.to_string(),
        })?;
        self.delays = self.delays.with(region, delay);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    /// Sets environment variables for one test and removes them on drop.
    struct EnvGuard(Vec<&'static str>);

    impl EnvGuard {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
            Self(vars.iter().map(|(key, _)| *key).collect())
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.0 {
                std::env::remove_var(key);
            }
        }
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial(moana_env)]
    fn test_load_from_file() {
        let file = write_config(
            r#"
            [reveal]
            map = "500ms"
            charts = "4s"

            [ui]
            theme = "light"
            tick_ms = 40

            [logging]
            file = "moana.log"
            level = "debug"
            "#,
        );

        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.delays.get(Region::Map), Duration::from_millis(500));
        assert_eq!(settings.delays.get(Region::Widgets), RevealDelays::DEFAULT_WIDGETS);
        assert_eq!(settings.delays.get(Region::Charts), Duration::from_secs(4));
        assert_eq!(settings.ui.theme, ThemeChoice::Light);
        assert_eq!(settings.ui.tick(), Duration::from_millis(40));
        assert_eq!(settings.logging.file, Some(PathBuf::from("moana.log")));
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    #[serial(moana_env)]
    fn test_empty_file_gives_defaults() {
        let file = write_config("");
        let settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.delays, RevealDelays::default());
        assert_eq!(settings.ui, UiSettings::default());
        assert_eq!(settings.logging.level, "info");
        assert!(settings.logging.file.is_none());
    }

    #[test]
    #[serial(moana_env)]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Settings::load(Some(missing.as_path())),
            Err(SettingsError::Load(_))
        ));
    }

    #[test]
    #[serial(moana_env)]
    fn test_invalid_delay_names_region() {
        let file = write_config("[reveal]\nwidgets = \"eventually\"\n");
        let err = Settings::load(Some(file.path())).unwrap_err();
        match err {
            SettingsError::InvalidDelay { region, value, .. } => {
                assert_eq!(region, Region::Widgets);
                assert_eq!(value, "eventually");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    #[serial(moana_env)]
    fn test_environment_overrides_file() {
        let file = write_config(
            r#"
            [reveal]
            map = "500ms"
            charts = "1s"

            [ui]
            theme = "dark"
            tick_ms = 120
            "#,
        );
        let _env = EnvGuard::set(&[
            ("MOANA__REVEAL__MAP", "2s"),
            ("MOANA__REVEAL__CHARTS", "4000"),
            ("MOANA__UI__TICK_MS", "40"),
        ]);

        let mut settings = Settings::load(Some(file.path())).unwrap();
        assert_eq!(settings.delays.get(Region::Map), Duration::from_secs(2));
        assert_eq!(settings.delays.get(Region::Widgets), RevealDelays::DEFAULT_WIDGETS);
        assert_eq!(settings.delays.get(Region::Charts), Duration::from_secs(4));
        assert_eq!(settings.ui.tick_ms, 40);
        assert_eq!(settings.ui.theme, ThemeChoice::Dark);

        // Command-line values are applied last
        settings.override_delay(Region::Charts, "750ms").unwrap();
        assert_eq!(settings.delays.get(Region::Charts), Duration::from_millis(750));
        assert_eq!(settings.delays.get(Region::Map), Duration::from_secs(2));
    }

    #[test]
    fn test_override_delay() {
        let mut settings = Settings::default();
        settings.override_delay(Region::Charts, "1.2s").unwrap();
        assert_eq!(settings.delays.get(Region::Charts), Duration::from_millis(1200));
        assert!(settings.override_delay(Region::Map, "later").is_err());
        assert_eq!(settings.delays.get(Region::Map), RevealDelays::DEFAULT_MAP);
    }

    #[test]
    fn test_zero_tick_is_clamped() {
        let ui = UiSettings {
            theme: ThemeChoice::Dark,
            tick_ms: 0,
        };
        assert_eq!(ui.tick(), Duration::from_millis(1));
    }
}
