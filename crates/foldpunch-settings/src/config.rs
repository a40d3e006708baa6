//! Configuration for foldpunch
//!
//! Configuration is organized into sections:
//! - Resolver settings (traversal strategy, preimage limit)
//! - Logging settings (level, output format)
//!
//! Files may be JSON or TOML, chosen by extension. Every field has a default,
//! so a partial file only overrides what it names.

use std::path::{Path, PathBuf};

use foldpunch_core::{ResolverOptions, Traversal};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FOLDPUNCH_CONFIG";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Resolver settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// How the fold history is walked
    pub traversal: Traversal,
    /// Optional cap on preimages visited per query
    pub max_preimages: Option<usize>,
}

impl ResolverSettings {
    pub fn options(&self) -> ResolverOptions {
        ResolverOptions {
            traversal: self.traversal,
            max_preimages: self.max_preimages,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human readable output
    Pretty,
    /// Single-line human readable output
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Compact => write!(f, "compact"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level directive; `RUST_LOG` takes precedence
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source line numbers in log events
    pub line_numbers: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
            line_numbers: false,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub resolver: ResolverSettings,
    pub logging: LoggingSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.resolver.max_preimages == Some(0) {
            return Err(SettingsError::InvalidSetting {
                key: "resolver.max_preimages".to_string(),
                reason: "must be > 0 when set".to_string(),
            });
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(SettingsError::InvalidSetting {
                key: "logging.level".to_string(),
                reason: format!("unknown level '{}'", self.logging.level),
            });
        }

        Ok(())
    }
}

/// Location of the config file to use, if any.
///
/// `FOLDPUNCH_CONFIG` wins; otherwise `<config dir>/foldpunch/config.toml` is
/// used when it exists.
pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(
        std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from),
        dirs::config_dir(),
    )
}

fn resolve_config_path(explicit: Option<PathBuf>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path);
    }
    config_dir
        .map(|dir| dir.join("foldpunch").join("config.toml"))
        .filter(|path| path.is_file())
}
