//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Base URL of the public Beagle Security REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.beaglesecurity.com/rest/v2";

/// Environment variable holding the Beagle Security bearer token.
pub const API_TOKEN_VAR: &str = "BEAGLE_SECURITY_API_TOKEN";

/// Environment variable overriding the API base URL.
pub const API_URL_VAR: &str = "BEAGLE_SECURITY_API_URL";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Remote API endpoint and credential.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Beagle Security API configuration.
///
/// Built once at startup and handed to the API client; the token is never
/// read from the environment after that.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL that request paths are appended to.
    pub base_url: String,

    /// Bearer token sent with every request. May be empty.
    pub token: String,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &if self.token.is_empty() { "" } else { "[REDACTED]" })
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "beagle-security-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` (after loading `.env`).
    ///
    /// Available before the rest of the configuration so the subscriber can
    /// be installed first and the warnings from [`Config::from_env`] reach it.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            level: std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...). The API token is read from
    /// `BEAGLE_SECURITY_API_TOKEN`; a missing token is only warned about.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var(API_URL_VAR) {
            info!("Using Beagle Security API at {}", base_url);
            config.api.base_url = base_url;
        }

        match std::env::var(API_TOKEN_VAR) {
            Ok(token) if !token.is_empty() => {
                config.api.token = token;
                info!("Beagle Security API token loaded from environment");
            }
            _ => {
                warn!(
                    "{} not set - requests will be sent without a valid credential",
                    API_TOKEN_VAR
                );
            }
        }

        config
    }

    /// Check settings that would make every tool call fail.
    pub fn validate(&self) -> crate::core::Result<()> {
        let base_url = self.api.base_url.as_str();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(crate::core::Error::config(format!(
                "{} must be an http(s) URL, got '{}'",
                API_URL_VAR, base_url
            )));
        }
        Ok(())
    }
}
