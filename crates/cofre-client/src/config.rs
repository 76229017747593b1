//! Client configuration

use std::time::Duration;

/// Configuration for [`crate::VigenereClient`]
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the cipher service, including the API prefix
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/api/vigenere".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("cofre-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Create a new config with the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}
