//! Configuration management with environment variable support
//!
//! Settings for reaching the PixelHub API, read once at startup.

use std::env;
use std::time::Duration;

/// Default PixelHub service address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// API version path segment
pub const API_VERSION: &str = "v1";

/// Timeout applied to every outbound request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent identifying this adapter to the PixelHub API
pub const USER_AGENT: &str = concat!("PixelHub-MCP-Server/", env!("CARGO_PKG_VERSION"));

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PixelHub service URL, without the `/api/<version>` suffix
    pub base_url: String,
    /// API version path segment
    pub api_version: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: API_VERSION.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Supported environment variables:
    /// - PIXELHUB_BASE_URL: PixelHub service URL (default: http://localhost:8080)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("PIXELHUB_BASE_URL") {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }

        config
    }

    /// Point the configuration at a different service
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Root of the versioned API, e.g. `http://localhost:8080/api/v1`
    pub fn api_base(&self) -> String {
        format!(
            "{}/api/{}",
            self.base_url.trim().trim_end_matches('/'),
            self.api_version
        )
    }

    /// Log configuration summary
    ///
    /// Goes through tracing rather than stdout, which carries the MCP transport.
    pub fn log_summary(&self) {
        tracing::info!(
            base_url = %self.base_url,
            api_version = %self.api_version,
            timeout_secs = self.timeout.as_secs(),
            "PixelHub configuration loaded"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.api_version, "v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_api_base() {
        let config = Config::default();
        assert_eq!(config.api_base(), "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_api_base_trims_trailing_slash() {
        let config = Config::with_base_url("https://pixelhub.example.com/");
        assert_eq!(config.api_base(), "https://pixelhub.example.com/api/v1");
    }

    #[test]
    fn test_user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("PixelHub-MCP-Server/"));
        assert!(USER_AGENT.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_from_env() {
        unsafe {
            env::set_var("PIXELHUB_BASE_URL", "http://pixelhub.test:9000");
        }

        let config = Config::from_env();
        assert_eq!(config.base_url, "http://pixelhub.test:9000");
        assert_eq!(config.api_version, "v1");

        unsafe {
            env::remove_var("PIXELHUB_BASE_URL");
        }
    }
}
