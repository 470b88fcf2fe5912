//! Domain-specific error types for sprint-mind

use thiserror::Error;

/// Main error type for the sprint-mind engine
#[derive(Error, Debug)]
pub enum SprintMindError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Unknown report kind: {kind}")]
    UnknownReportKind { kind: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for SprintMindError {
    fn from(err: anyhow::Error) -> Self {
        SprintMindError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SprintMindError {
    fn from(err: serde_json::Error) -> Self {
        SprintMindError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for SprintMindError {
    fn from(err: toml::de::Error) -> Self {
        SprintMindError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type alias for sprint-mind operations
pub type Result<T> = std::result::Result<T, SprintMindError>;
