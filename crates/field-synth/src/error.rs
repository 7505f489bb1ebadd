//! Error types for field synthesis.

use std::path::Path;

use thiserror::Error;

/// Result type for field synthesis.
pub type SynthResult<T> = Result<T, SynthError>;

#[derive(Error, Debug)]
pub enum SynthError {
    /// A parameter is outside its valid range.
    #[error("invalid field configuration: {0}")]
    InvalidConfig(String),

    /// A configuration file could not be parsed.
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

impl SynthError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn parse(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn io(path: &Path, err: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}
