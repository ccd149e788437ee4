//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PARTSMARKET_API_URL` - Base URL of the marketplace REST API
//!   (e.g. `http://localhost:5282/api`)

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid API base URL {0}: {1}")]
    InvalidBaseUrl(String, String),
}

/// Client SDK configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend REST API, without a trailing slash.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Create a configuration from an explicit base URL.
    ///
    /// Trailing slashes are stripped so paths can be appended verbatim.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the value does not parse as
    /// an absolute URL.
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = api_base_url.into();
        Url::parse(&raw).map_err(|e| ConfigError::InvalidBaseUrl(raw.clone(), e.to_string()))?;

        Ok(Self {
            api_base_url: raw.trim_end_matches('/').to_string(),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PARTSMARKET_API_URL` is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::new(get_required_env("PARTSMARKET_API_URL")?)
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}
