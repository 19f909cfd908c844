//! Configuration module for the customer console.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the customer REST service
    pub api_url: String,
    /// Per-request timeout for the HTTP client
    pub http_timeout: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_url = env::var("CUSTOMERS_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:3333".to_string());

        let timeout_ms: u64 = env::var("CUSTOMERS_HTTP_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let log_level = env::var("CUSTOMERS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            api_url,
            http_timeout: Duration::from_millis(timeout_ms),
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("CUSTOMERS_API_URL");
        env::remove_var("CUSTOMERS_HTTP_TIMEOUT_MS");
        env::remove_var("CUSTOMERS_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.api_url, "http://127.0.0.1:3333");
        assert_eq!(config.http_timeout, Duration::from_millis(10_000));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_timeout_override() {
        env::set_var("CUSTOMERS_HTTP_TIMEOUT_MS", "2500");

        let config = Config::from_env();
        assert_eq!(config.http_timeout, Duration::from_millis(2500));

        env::remove_var("CUSTOMERS_HTTP_TIMEOUT_MS");
    }
}
