//! # Configuration Management
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `DASHBOARD__*` environment variables (`DASHBOARD__ENGINE__KDE__NUM_POINTS=400`).

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use stat_engine::EngineConfig;
use tracing::debug;

use crate::error::{DashboardError, Result};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "DASHBOARD";

/// Main configuration for the dashboard service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Where the dataset export lives
    pub dataset: DatasetConfig,
    /// Statistical transform parameters
    pub engine: EngineConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path of the JSON dataset export
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("./data/dashboard.json") }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

impl DashboardConfig {
    /// Build the layered configuration. A missing `path` is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = path {
            debug!("Loading configuration from file: {:?}", path);
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let config: Self = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, without environment overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(DashboardError::InvalidSetting(format!("log level: {other}")));
            }
        }

        match self.logging.format.as_str() {
            "json" | "pretty" | "compact" => {}
            other => {
                return Err(DashboardError::InvalidSetting(format!("log format: {other}")));
            }
        }

        Ok(())
    }
}
