//! Client configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the client can start against the
//! mock data source with zero configuration.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use backoffice_shared::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_MOCK_LATENCY_MS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown data source {0:?} (expected \"mock\" or \"live\")")]
    UnknownDataSource(String),
}

/// Where repositories get their data from. Chosen once at bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// In-memory fixtures, for offline development.
    Mock,
    /// The REST backend at [`ClientConfig::api_base_url`].
    Live,
}

impl FromStr for DataSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "live" => Ok(Self::Live),
            other => Err(ConfigError::UnknownDataSource(other.to_string())),
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base path every endpoint is appended to.
    /// Env: `BACKOFFICE_API_BASE_URL`
    /// Default: `http://localhost:8080/api`
    pub api_base_url: String,

    /// Env: `BACKOFFICE_DATA_SOURCE` (`mock` / `live`)
    /// Default: `mock`
    pub data_source: DataSource,

    /// Simulated latency of every mock call.
    /// Env: `BACKOFFICE_MOCK_LATENCY_MS`
    /// Default: 300 ms
    pub mock_latency: Duration,

    /// Env: `BACKOFFICE_REQUEST_TIMEOUT_SECS`
    /// Default: 30 s
    pub request_timeout: Duration,

    /// Directory holding the persisted client state database.
    /// Env: `BACKOFFICE_DATA_DIR`
    /// Default: platform data directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_source: DataSource::Mock,
            mock_latency: Duration::from_millis(DEFAULT_MOCK_LATENCY_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            data_dir: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("BACKOFFICE_API_BASE_URL") {
            let url = url.trim().trim_end_matches('/');
            if url.is_empty() {
                tracing::warn!("Empty BACKOFFICE_API_BASE_URL, using default");
            } else {
                config.api_base_url = url.to_string();
            }
        }

        if let Some(source) = lookup("BACKOFFICE_DATA_SOURCE") {
            match source.parse::<DataSource>() {
                Ok(parsed) => config.data_source = parsed,
                Err(e) => tracing::warn!(error = %e, "Invalid BACKOFFICE_DATA_SOURCE, using default"),
            }
        }

        if let Some(val) = lookup("BACKOFFICE_MOCK_LATENCY_MS") {
            match val.trim().parse::<u64>() {
                Ok(ms) => config.mock_latency = Duration::from_millis(ms),
                Err(_) => tracing::warn!(value = %val, "Invalid BACKOFFICE_MOCK_LATENCY_MS, using default"),
            }
        }

        if let Some(val) = lookup("BACKOFFICE_REQUEST_TIMEOUT_SECS") {
            match val.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => tracing::warn!(value = %val, "Invalid BACKOFFICE_REQUEST_TIMEOUT_SECS, using default"),
            }
        }

        if let Some(dir) = lookup("BACKOFFICE_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        config
    }
}
