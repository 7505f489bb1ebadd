//! Error types for run discovery.

use thiserror::Error;

/// Result type for discovery operations.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("HTTP request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid listing XML: {0}")]
    Xml(String),

    #[error("Invalid timestep key: {0}")]
    InvalidKey(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl DiscoveryError {
    pub fn http(url: &str, err: impl std::fmt::Display) -> Self {
        Self::Http {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    /// Whether retrying the same request could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { .. } => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<quick_xml::Error> for DiscoveryError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}
