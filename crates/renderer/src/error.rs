//! Error types for rendering.

use gaussian_grid::GridError;
use thiserror::Error;

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}
