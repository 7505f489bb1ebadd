//! Error types for grid construction and value file handling.

use thiserror::Error;

/// Result type alias using GridError.
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised while building a grid or reading/writing grid values.
#[derive(Debug, Error)]
pub enum GridError {
    /// The resolution parameter cannot describe a grid.
    #[error("invalid grid resolution O{0}: N must be at least 1")]
    InvalidResolution(usize),

    /// The value array does not cover the grid exactly.
    #[error("value array has {actual} points, grid O{n} expects {expected}")]
    LengthMismatch {
        n: usize,
        expected: usize,
        actual: usize,
    },

    /// A value file ends in the middle of a 32-bit float.
    #[error("value file is {len} bytes, not a whole number of f32 values")]
    TruncatedFile { len: usize },

    /// Filesystem failure while reading or writing values.
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

impl GridError {
    /// Create an Io error tagged with the path that failed.
    pub fn io(path: impl AsRef<std::path::Path>, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    /// Whether the error concerns the data itself rather than the environment.
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            GridError::LengthMismatch { .. } | GridError::TruncatedFile { .. }
        )
    }
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        GridError::Io {
            path: "<unknown>".to_string(),
            message: err.to_string(),
        }
    }
}
