//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the signup service (e.g. `http://localhost:8000`)
    pub service_url: String,
    /// Per-request timeout for calls to the signup service
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `SIGNUP_SERVICE_URL` is required; `SIGNUP_REQUEST_TIMEOUT_SECS`
    /// defaults to 10 seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let service_url = env::var("SIGNUP_SERVICE_URL")
            .map_err(|_| ConfigError::Missing("SIGNUP_SERVICE_URL"))?
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("SIGNUP_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        Ok(Self {
            service_url,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Config pointing at a given base URL, with defaults for the rest.
    pub fn for_service_url(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
