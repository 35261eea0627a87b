//! Client configuration

/// Configuration for connecting to the remote order store
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STORE_URL | http://localhost:3000/store | Endpoint URL |
/// | REQUEST_TIMEOUT_SECS | 30 | Per-request timeout |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Store endpoint URL (e.g. a Google Apps Script exec URL)
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a new configuration for the given endpoint
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("STORE_URL").unwrap_or_else(|_| "http://localhost:3000/store".into());
        let timeout_secs = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        Self {
            base_url,
            timeout_secs,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// Create a store client from this configuration
    pub fn build_client(&self) -> crate::ClientResult<crate::StoreClient> {
        crate::StoreClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000/store")
    }
}
