//! Player configuration from environment variables
//!
//! | Variable                      | Default                 |
//! |-------------------------------|-------------------------|
//! | `QUIZDECK_SERVER_URL`         | `http://localhost:3000` |
//! | `QUIZDECK_REQUEST_TIMEOUT_MS` | `30000`                 |
//!
//! Values from `.env.local` and `.env` are picked up by [`load_dotenv`];
//! variables already set in the process environment always win.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

pub const SERVER_URL_VAR: &str = "QUIZDECK_SERVER_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "QUIZDECK_REQUEST_TIMEOUT_MS";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("QUIZDECK_SERVER_URL must be an http(s) URL, got {0:?}")]
    InvalidServerUrl(String),
    #[error("QUIZDECK_REQUEST_TIMEOUT_MS must be a positive number of milliseconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Base URL of the server hosting the server functions, without trailing `/`
    pub server_url: String,
    pub request_timeout: Duration,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

impl PlayerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let server_url = match read(SERVER_URL_VAR) {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                url.trim_end_matches('/').to_string()
            }
            Some(url) => return Err(ConfigError::InvalidServerUrl(url)),
            None => DEFAULT_SERVER_URL.to_string(),
        };

        let request_timeout = match read(REQUEST_TIMEOUT_VAR) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        };

        Ok(Self {
            server_url,
            request_timeout,
        })
    }
}

/// Load `.env.local` then `.env` from `dir`; returns the files that were read.
pub fn load_dotenv(dir: &Path) -> Vec<PathBuf> {
    // Prefer local overrides.
    [".env.local", ".env"]
        .into_iter()
        .map(|filename| dir.join(filename))
        .filter(|path| path.exists())
        .filter(|path| match dotenvy::from_path(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable env file");
                false
            }
        })
        .collect()
}
