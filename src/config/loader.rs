// Configuration loader
// Loads the Gemini key from ~/.revu/config.toml or environment variable

use std::fs;

use super::constants::GEMINI_KEY_ENV;
use super::settings::{Config, ServerConfig};
use crate::errors::{ReviewError, Result};

/// Load configuration from the revu config file or environment
pub fn load_config() -> Result<Config> {
    // Try loading from ~/.revu/config.toml first
    if let Some(config) = try_load_from_revu_config()? {
        return Ok(config);
    }

    // Fall back to environment variable
    if let Ok(api_key) = std::env::var(GEMINI_KEY_ENV) {
        if !api_key.is_empty() {
            return Ok(Config::with_api_key(api_key));
        }
    }

    Err(ReviewError::Configuration(format!(
        "no configuration found; create ~/.revu/config.toml with an api_key \
         entry or set the {GEMINI_KEY_ENV} environment variable"
    )))
}

fn try_load_from_revu_config() -> Result<Option<Config>> {
    let Some(home) = dirs::home_dir() else {
        return Ok(None);
    };
    let config_path = home.join(".revu/config.toml");

    if !config_path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&config_path).map_err(|e| {
        ReviewError::Configuration(format!("failed to read {}: {e}", config_path.display()))
    })?;

    #[derive(serde::Deserialize)]
    struct TomlConfig {
        api_key: Option<String>,
        model: Option<String>,
        default_language: Option<String>,
        server: Option<ServerConfig>,
    }

    let toml_config: TomlConfig = toml::from_str(&contents).map_err(|e| {
        ReviewError::Configuration(format!("failed to parse {}: {e}", config_path.display()))
    })?;

    // The key may live in the file or the environment; the file wins.
    let api_key = match toml_config.api_key {
        Some(key) if !key.is_empty() => key,
        _ => std::env::var(GEMINI_KEY_ENV).unwrap_or_default(),
    };

    let mut config = Config::with_api_key(api_key);
    if let Some(model) = toml_config.model {
        config.model = model;
    }
    if let Some(language) = toml_config.default_language {
        config.default_language = language;
    }
    if let Some(server) = toml_config.server {
        config.server = server;
    }

    // Validate configuration
    config.validate()?;

    Ok(Some(config))
}
