//! Error types for AutoTrack

use thiserror::Error;

/// The main error type for AutoTrack operations
#[derive(Debug, Error)]
pub enum AutoTrackError {
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Duplicate object name: {0}")]
    DuplicateObjectName(String),

    #[error("Track target not found: {0}")]
    TargetNotFound(String),

    #[error("Scene error: {0}")]
    SceneError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for AutoTrack operations
pub type Result<T> = std::result::Result<T, AutoTrackError>;

impl From<toml::de::Error> for AutoTrackError {
    fn from(err: toml::de::Error) -> Self {
        AutoTrackError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for AutoTrackError {
    fn from(err: toml::ser::Error) -> Self {
        AutoTrackError::TomlSerError(err.to_string())
    }
}
