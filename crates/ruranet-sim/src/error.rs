//! Error types for the scenario runner

use thiserror::Error;

use ruranet_core::{ConfigError, PropagationError};

/// Result type for runner operations
pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Propagation(#[from] PropagationError),

    /// Scenario file could not be read or written
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Scenario file is malformed or structurally invalid
    #[error("invalid scenario: {0}")]
    Scenario(String),

    /// Report or catalog could not be encoded
    #[error("failed to encode output: {0}")]
    Encode(String),

    /// Command-line value rejected
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SimError {
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        SimError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
