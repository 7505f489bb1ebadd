//! Discovery client configuration.

use std::time::Duration;

/// Public bucket holding the spatial model runs.
pub const DEFAULT_BASE_URL: &str = "https://openmeteo.s3.amazonaws.com";

/// Configuration for the bucket listing client.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Bucket root URL, without a trailing slash.
    pub base_url: String,
    /// Timeout for each listing or HEAD request.
    pub request_timeout: Duration,
    /// HEAD requests in flight at once while verifying.
    pub parallel_checks: usize,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            parallel_checks: 4,
        }
    }
}

impl DiscoveryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("DISCOVERY_BASE_URL") {
            config.base_url = val.trim_end_matches('/').to_string();
        }

        if let Ok(val) = std::env::var("DISCOVERY_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                config.request_timeout = Duration::from_secs(secs);
            }
        }

        if let Ok(val) = std::env::var("DISCOVERY_PARALLEL_CHECKS") {
            if let Ok(n) = val.parse::<usize>() {
                config.parallel_checks = n.max(1);
            }
        }

        config
    }

    /// Override the base URL, dropping any trailing slash.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Full URL of an object key.
    pub fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.base_url, key)
    }
}
