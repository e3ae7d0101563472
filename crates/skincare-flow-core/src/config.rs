//! TOML-based application configuration.
//!
//! Holds the pre-selected routine options, the timer tick period and
//! haptic feedback settings. The file is only ever read; a missing file
//! means defaults.
//!
//! Configuration lives at `$SKINCARE_FLOW_CONFIG` when set, otherwise at
//! `<config dir>/skincare-flow/config.toml`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::haptics::DEFAULT_PULSE;
use crate::routine::{GoingOut, RoutineOptions};
use crate::timer::DEFAULT_TICK_PERIOD;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SKINCARE_FLOW_CONFIG";

/// Option pre-selection for the intro screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub saturday: bool,
    /// Pre-select the Saturday hair wash when today is a Saturday.
    #[serde(default = "default_true")]
    pub detect_saturday: bool,
    #[serde(default)]
    pub bha_tonight: bool,
    #[serde(default = "default_true")]
    pub minoxidil_twice: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HapticsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_pulse_ms")]
    pub pulse_ms: u64,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub haptics: HapticsConfig,
}

fn default_true() -> bool {
    true
}
fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_PERIOD.as_millis() as u64
}
fn default_pulse_ms() -> u64 {
    DEFAULT_PULSE.as_millis() as u64
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            saturday: false,
            detect_saturday: true,
            bha_tonight: false,
            minoxidil_twice: true,
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl Default for HapticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pulse_ms: default_pulse_ms(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Location of the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform has no
    /// configuration directory.
    pub fn path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(base.join("skincare-flow").join("config.toml"))
    }

    /// Load from the default location, or defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, or defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, cannot be
    /// parsed, or holds an out-of-range value.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.timer.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "timer.tick_interval_ms".into(),
                message: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.timer.tick_interval_ms)
    }

    pub fn pulse(&self) -> Duration {
        Duration::from_millis(self.haptics.pulse_ms)
    }

    /// Intro options for a session starting on `today`.
    ///
    /// Going-out always starts unanswered.
    pub fn initial_options(&self, today: Weekday) -> RoutineOptions {
        let saturday =
            self.defaults.saturday || (self.defaults.detect_saturday && today == Weekday::Sat);
        RoutineOptions {
            going_out: GoingOut::Unknown,
            saturday,
            do_bha_tonight: self.defaults.bha_tonight,
            minoxidil_twice: self.defaults.minoxidil_twice,
            used_spf_today: false,
        }
    }
}
