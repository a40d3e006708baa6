//! foldpunch settings crate
//!
//! Loads, validates and saves the application configuration.

pub mod config;
pub mod error;

pub use config::{
    config_path, Config, LogFormat, LoggingSettings, ResolverSettings, CONFIG_ENV_VAR,
};
pub use error::{SettingsError, SettingsResult};
