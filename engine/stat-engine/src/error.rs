//! Error types for the stat engine

use thiserror::Error;

/// Result type for stat engine operations
pub type Result<T> = std::result::Result<T, StatError>;

/// Errors raised by the stat engine.
///
/// The numeric transforms themselves never fail; these cover the edges where
/// identifiers and configuration enter the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatError {
    #[error("Unknown stat category: {0}")]
    UnknownCategory(String),

    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

impl StatError {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        StatError::InvalidConfig { field, reason: reason.into() }
    }
}
