//! Application configuration

use bloom_client::ClientConfig;

/// TUI configuration, loaded from environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STORE_URL | http://localhost:3000/store | Remote store endpoint |
/// | REQUEST_TIMEOUT_SECS | 30 | Per-request timeout |
/// | RUST_LOG | warn | Log filter (tracing EnvFilter) |
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Remote store connection settings
    pub store: ClientConfig,
}

impl AppConfig {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            store: ClientConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
