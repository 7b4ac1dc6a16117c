//! Configuration management for the DeepL exporter
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// DeepL API key; a `:fx` suffix marks a Free key
    pub deepl_api_key: String,
    /// Override for the tier-resolved usage endpoint
    pub deepl_api_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| "1818".to_string())
                .parse()
                .context("Invalid PORT")?,

            deepl_api_key: env::var("DEEPL_API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .context("DEEPL_API_KEY environment variable is required")?,
            deepl_api_url: env::var("DEEPL_API_URL").ok().filter(|u| !u.is_empty()),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("deepl_api_key", &"<redacted>")
            .field("deepl_api_url", &self.deepl_api_url)
            .finish()
    }
}
