// Configuration structs

use serde::Deserialize;

use super::constants::{DEFAULT_HTTP_ADDR, DEFAULT_LANGUAGE, DEFAULT_MODEL};
use crate::errors::{ReviewError, Result};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_HTTP_ADDR.to_string(),
        }
    }
}

fn default_bind_address() -> String {
    DEFAULT_HTTP_ADDR.to_string()
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key
    pub api_key: String,

    /// Gemini model name (e.g., "gemini-2.5-pro")
    pub model: String,

    /// Language tag applied when a request carries no language and the
    /// sniffer abstains
    pub default_language: String,

    /// HTTP server settings
    pub server: ServerConfig,
}

impl Config {
    /// Build a config with defaults around the given API key.
    pub fn with_api_key(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            server: ServerConfig::default(),
        }
    }

    /// Validate configuration before the server starts.
    ///
    /// A missing credential is caught here rather than on the first
    /// request, so no upstream call is ever attempted against a broken
    /// setup.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(ReviewError::Configuration(
                "Gemini API key is empty".to_string(),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(ReviewError::Configuration(
                "model name is empty".to_string(),
            ));
        }
        if self
            .server
            .bind_address
            .parse::<std::net::SocketAddr>()
            .is_err()
        {
            return Err(ReviewError::Configuration(format!(
                "invalid bind address: {}",
                self.server.bind_address
            )));
        }
        Ok(())
    }
}
