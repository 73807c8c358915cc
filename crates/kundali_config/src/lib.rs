//! Layered configuration for the kundali backend: engine commands and
//! timeouts, ephemeris settings, and the default location.

pub mod config;
pub mod error;

pub use config::{
    CONFIG_PATH_ENV, EngineSettings, EnginesConfig, EphemerisSettings, KundaliConfig,
    LocationSettings,
};
pub use error::{ConfigError, ConfigResult};
