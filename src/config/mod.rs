//! Configuration module for the catalog admin engine.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the remote catalog API, without a trailing slash
    pub api_base_url: String,
    /// Bearer token for the session, when one was provisioned out of band
    pub api_token: Option<String>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("CATALOG_API_BASE_URL")
            .ok()
            .map(|url| normalize_base_url(&url))
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let api_token = env::var("CATALOG_API_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let log_level = env::var("CATALOG_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_base_url,
            api_token,
            log_level,
        }
    }
}

/// Trim whitespace and trailing slashes so paths can be appended directly.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("CATALOG_API_BASE_URL");
        env::remove_var("CATALOG_API_TOKEN");
        env::remove_var("CATALOG_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
        assert!(config.api_token.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url(" https://api.example.com/ "),
            "https://api.example.com"
        );
        assert_eq!(normalize_base_url("https://api.example.com//"), "https://api.example.com");
        assert_eq!(normalize_base_url("http://localhost:5000"), "http://localhost:5000");
    }
}
