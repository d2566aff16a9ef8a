//! Error types for Ember

use thiserror::Error;

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("Malformed curve data: {0}")]
    MalformedCurveData(String),

    #[error("Invalid edit: {0}")]
    InvalidEdit(String),

    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Emitter not found: {0}")]
    EmitterNotFound(String),

    #[error("History error: {0}")]
    HistoryError(String),

    #[error("Effect error: {0}")]
    EffectError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        EmberError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for EmberError {
    fn from(err: toml::ser::Error) -> Self {
        EmberError::TomlSerError(err.to_string())
    }
}
