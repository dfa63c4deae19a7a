//! Console configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `HOTELIER_API_URL` - Base URL of the reservation backend, including the
//!   `/api/v1` prefix (default: `http://127.0.0.1:8000/api/v1`)
//! - `HOTELIER_SESSION_FILE` - Path of the persisted session file
//!   (default: `.hotelier/session.json`)
//! - `HOTELIER_TIMEOUT_SECS` - Per-request timeout in seconds (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/v1";
const DEFAULT_SESSION_FILE: &str = ".hotelier/session.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Console application configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL of the backend API, with the version prefix.
    pub api_url: Url,
    /// Where the session state is persisted between runs.
    pub session_file: PathBuf,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_env_or_default("HOTELIER_API_URL", DEFAULT_API_URL);
        let api_url = Url::parse(&api_url)
            .map_err(|e| ConfigError::InvalidEnvVar("HOTELIER_API_URL".to_string(), e.to_string()))?;

        let session_file =
            PathBuf::from(get_env_or_default("HOTELIER_SESSION_FILE", DEFAULT_SESSION_FILE));

        let timeout_secs = get_env_or_default(
            "HOTELIER_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("HOTELIER_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            api_url,
            session_file,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
