//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use axum::http::HeaderValue;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_LOG_FILTER, DEFAULT_NOTIFIER_SENDER, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub notifier: NotifierConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub cors_origin: CorsOrigin,
}

/// Origins allowed to call the API from a browser
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigin {
    Any,
    Exact(HeaderValue),
}

/// Outgoing notification configuration
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Address used in the `From` field of notifications
    pub sender: String,
}

/// Template API client configuration.
///
/// Loaded on its own by client code; the server never reads it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            notifier: NotifierConfig::from_env()?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: DEFAULT_LOG_FILTER.to_string(),
            cors_origin: CorsOrigin::Any,
        }
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            sender: DEFAULT_NOTIFIER_SENDER.to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            cors_origin: CorsOrigin::parse(
                &env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            )?,
        })
    }
}

impl CorsOrigin {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim() {
            "*" => Ok(Self::Any),
            origin => HeaderValue::from_str(origin)
                .map(Self::Exact)
                .map_err(|_| ConfigError::InvalidValue("CORS_ALLOW_ORIGIN".to_string())),
        }
    }
}

impl NotifierConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let sender =
            env::var("NOTIFIER_SENDER").unwrap_or_else(|_| DEFAULT_NOTIFIER_SENDER.to_string());
        if !sender.contains('@') {
            return Err(ConfigError::InvalidValue("NOTIFIER_SENDER".to_string()));
        }

        Ok(Self { sender })
    }
}

impl ClientConfig {
    /// Load the client's base URL from `NOTIFIER_API_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::parse(
            &env::var("NOTIFIER_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        )
    }

    fn parse(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("NOTIFIER_API_URL".to_string()));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.cors_origin, CorsOrigin::Any);
        assert_eq!(config.notifier.sender, "notifier@localhost");
        assert_eq!(ClientConfig::default().base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_client_base_url_parse() {
        assert_eq!(
            ClientConfig::parse("https://notifier.example.com/api/").unwrap().base_url,
            "https://notifier.example.com/api"
        );
        assert!(ClientConfig::parse("localhost:8080/api").is_err());
    }

    #[test]
    fn test_cors_origin_parse() {
        assert_eq!(CorsOrigin::parse("*").unwrap(), CorsOrigin::Any);
        assert_eq!(
            CorsOrigin::parse("http://localhost:5173").unwrap(),
            CorsOrigin::Exact(HeaderValue::from_static("http://localhost:5173"))
        );
        assert!(CorsOrigin::parse("bad\norigin").is_err());
    }
}
