//! Error types for the dashboard service

use stat_engine::{StatCategory, StatError};
use thiserror::Error;

/// Result type for dashboard service operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors that can occur while loading data or building views
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Config file error: {0}")]
    ConfigFile(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Stat engine error: {0}")]
    Engine(#[from] StatError),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("No {stat} record line for {player}")]
    RecordNotFound { player: String, stat: StatCategory },

    #[error("No play-by-play for game {0}")]
    GameNotFound(String),

    #[error("No qualifying players with a {0} value")]
    EmptyPopulation(StatCategory),
}

impl From<toml::de::Error> for DashboardError {
    fn from(err: toml::de::Error) -> Self {
        DashboardError::ConfigFile(err.to_string())
    }
}

impl From<toml::ser::Error> for DashboardError {
    fn from(err: toml::ser::Error) -> Self {
        DashboardError::ConfigFile(err.to_string())
    }
}
