//! Kundali configuration.
//!
//! ## Load Order (later overrides earlier)
//! 1. Default values
//! 2. Config file (`KUNDALI_CONFIG` or an explicit path)
//! 3. Environment variables
//!
//! ## Example `kundali.toml`
//! ```toml
//! [engines.primary]
//! program = "python3"
//! args = ["engines/primary_engine.py"]
//! timeout_ms = 5000
//! label = "primary"
//!
//! [engines.fallback]
//! program = "node"
//! args = ["engines/fallback_engine.js"]
//! timeout_ms = 7000
//! label = "fallback"
//!
//! [ephemeris]
//! utc_offset_hours = 5.5
//! calibration = "professional"
//! retrograde_model = "synodic_cycle"
//!
//! [location]
//! latitude = 28.6139
//! longitude = 77.2090
//! place = "New Delhi"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use kundali_ephem::{CalibrationProfile, EphemerisConfig, RetrogradeModel, validate_coordinates};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable naming the config file when no path is given.
pub const CONFIG_PATH_ENV: &str = "KUNDALI_CONFIG";

// =============================================================================
// Engines
// =============================================================================

/// How to launch one external chart engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Executable to spawn.
    pub program: String,

    /// Arguments passed before the JSON payload is written to stdin.
    #[serde(default)]
    pub args: Vec<String>,

    /// Wall-clock budget for one invocation, milliseconds.
    pub timeout_ms: u64,

    /// Name used in logs and error messages.
    pub label: String,
}

impl EngineSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_primary() -> EngineSettings {
    EngineSettings {
        program: "python3".into(),
        args: vec!["engines/primary_engine.py".into()],
        timeout_ms: default_primary_timeout_ms(),
        label: "primary".into(),
    }
}

fn default_fallback() -> EngineSettings {
    EngineSettings {
        program: "node".into(),
        args: vec!["engines/fallback_engine.js".into()],
        timeout_ms: default_fallback_timeout_ms(),
        label: "fallback".into(),
    }
}

fn default_primary_timeout_ms() -> u64 {
    5_000
}

fn default_fallback_timeout_ms() -> u64 {
    7_000
}

/// The primary and fallback engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnginesConfig {
    #[serde(default = "default_primary")]
    pub primary: EngineSettings,

    #[serde(default = "default_fallback")]
    pub fallback: EngineSettings,
}

impl Default for EnginesConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            fallback: default_fallback(),
        }
    }
}

// =============================================================================
// Ephemeris
// =============================================================================

/// Settings for the built-in calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSettings {
    /// Offset of the birth clock ahead of UTC, hours.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: f64,

    #[serde(default)]
    pub calibration: CalibrationProfile,

    #[serde(default)]
    pub retrograde_model: RetrogradeModel,
}

fn default_utc_offset_hours() -> f64 {
    5.5
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset_hours(),
            calibration: CalibrationProfile::default(),
            retrograde_model: RetrogradeModel::default(),
        }
    }
}

impl EphemerisSettings {
    pub fn to_ephemeris_config(&self) -> EphemerisConfig {
        EphemerisConfig {
            utc_offset_hours: self.utc_offset_hours,
            calibration: self.calibration.calibration(),
            retrograde_model: self.retrograde_model,
        }
    }
}

// =============================================================================
// Location
// =============================================================================

/// Location used when a request carries no coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSettings {
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    #[serde(default = "default_place")]
    pub place: String,
}

fn default_latitude() -> f64 {
    28.6139
}

fn default_longitude() -> f64 {
    77.2090
}

fn default_place() -> String {
    "New Delhi".into()
}

impl Default for LocationSettings {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            place: default_place(),
        }
    }
}

// =============================================================================
// Root
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KundaliConfig {
    #[serde(default)]
    pub engines: EnginesConfig,

    #[serde(default)]
    pub ephemeris: EphemerisSettings,

    #[serde(default)]
    pub location: LocationSettings,
}

impl KundaliConfig {
    /// Loads configuration from file, process environment and defaults.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Like [`KundaliConfig::load`], reading overrides through `env`.
    pub fn load_with<F>(config_path: Option<PathBuf>, env: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(|| env(CONFIG_PATH_ENV).map(PathBuf::from)) {
            if path.exists() {
                info!(?path, "Loading kundali config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(env);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load kundali config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML file without applying overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        info!(?path, "Kundali config saved");
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        for engine in [&self.engines.primary, &self.engines.fallback] {
            if engine.program.trim().is_empty() {
                return Err(ConfigError::InvalidConfig(format!(
                    "{} engine program must not be empty",
                    engine.label
                )));
            }
            if engine.timeout_ms == 0 {
                return Err(ConfigError::InvalidConfig(format!(
                    "{} engine timeout_ms must be greater than 0",
                    engine.label
                )));
            }
        }

        let offset = self.ephemeris.utc_offset_hours;
        if !offset.is_finite() || offset.abs() > 14.0 {
            return Err(ConfigError::InvalidConfig(format!(
                "utc_offset_hours must be within ±14, got {offset}"
            )));
        }

        validate_coordinates(self.location.latitude, self.location.longitude)
            .map_err(|e| ConfigError::InvalidConfig(format!("default location: {e}")))?;

        Ok(())
    }

    fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(program) = env("KUNDALI_PRIMARY_PROGRAM") {
            debug!(program = %program, "Overriding primary engine from environment");
            self.engines.primary.program = program;
        }

        if let Some(program) = env("KUNDALI_FALLBACK_PROGRAM") {
            debug!(program = %program, "Overriding fallback engine from environment");
            self.engines.fallback.program = program;
        }

        if let Some(ms) = env("KUNDALI_PRIMARY_TIMEOUT_MS") {
            match ms.parse::<u64>() {
                Ok(ms) => self.engines.primary.timeout_ms = ms,
                Err(_) => warn!(value = %ms, "Ignoring unparsable KUNDALI_PRIMARY_TIMEOUT_MS"),
            }
        }

        if let Some(ms) = env("KUNDALI_FALLBACK_TIMEOUT_MS") {
            match ms.parse::<u64>() {
                Ok(ms) => self.engines.fallback.timeout_ms = ms,
                Err(_) => warn!(value = %ms, "Ignoring unparsable KUNDALI_FALLBACK_TIMEOUT_MS"),
            }
        }

        if let Some(hours) = env("KUNDALI_UTC_OFFSET_HOURS") {
            match hours.parse::<f64>() {
                Ok(h) => self.ephemeris.utc_offset_hours = h,
                Err(_) => warn!(value = %hours, "Ignoring unparsable KUNDALI_UTC_OFFSET_HOURS"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_are_valid() {
        let config = KundaliConfig::default();
        config.validate().unwrap();
        assert_eq!(config.engines.primary.timeout(), Duration::from_secs(5));
        assert_eq!(config.engines.fallback.timeout(), Duration::from_secs(7));
        assert_eq!(config.location.place, "New Delhi");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: KundaliConfig = toml::from_str(
            r#"
            [ephemeris]
            calibration = "none"
            "#,
        )
        .unwrap();
        assert_eq!(config.ephemeris.calibration, CalibrationProfile::None);
        assert_eq!(config.ephemeris.utc_offset_hours, 5.5);
        assert_eq!(config.engines, EnginesConfig::default());
    }

    #[test]
    fn env_overrides_file_values() {
        let env = |key: &str| match key {
            "KUNDALI_PRIMARY_PROGRAM" => Some("/usr/local/bin/engine".to_string()),
            "KUNDALI_FALLBACK_TIMEOUT_MS" => Some("1500".to_string()),
            "KUNDALI_UTC_OFFSET_HOURS" => Some("0".to_string()),
            _ => None,
        };
        let config = KundaliConfig::load_with(None, env).unwrap();
        assert_eq!(config.engines.primary.program, "/usr/local/bin/engine");
        assert_eq!(config.engines.fallback.timeout_ms, 1500);
        assert_eq!(config.ephemeris.utc_offset_hours, 0.0);
    }

    #[test]
    fn garbage_env_value_is_ignored() {
        let env = |key: &str| (key == "KUNDALI_PRIMARY_TIMEOUT_MS").then(|| "soon".to_string());
        let config = KundaliConfig::load_with(None, env).unwrap();
        assert_eq!(config.engines.primary.timeout_ms, 5_000);
    }

    #[test]
    fn zero_timeout_rejected() {
        let env = |key: &str| (key == "KUNDALI_PRIMARY_TIMEOUT_MS").then(|| "0".to_string());
        let err = KundaliConfig::load_with(None, env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig(_)));
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn empty_program_rejected() {
        let mut config = KundaliConfig::default();
        config.engines.fallback.program = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_location_rejected() {
        let mut config = KundaliConfig::default();
        config.location.latitude = 123.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default location"));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config =
            KundaliConfig::load_with(Some(PathBuf::from("/nonexistent/kundali.toml")), no_env)
                .unwrap();
        assert_eq!(config, KundaliConfig::default());
    }

    #[test]
    fn ephemeris_settings_convert() {
        let settings = EphemerisSettings {
            utc_offset_hours: 0.0,
            calibration: CalibrationProfile::None,
            retrograde_model: RetrogradeModel::Velocity,
        };
        let eph = settings.to_ephemeris_config();
        assert_eq!(eph.utc_offset_hours, 0.0);
        assert_eq!(eph.retrograde_model, RetrogradeModel::Velocity);
        assert_eq!(eph.calibration, CalibrationProfile::None.calibration());
    }
}
