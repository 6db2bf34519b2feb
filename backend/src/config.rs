//! Startup configuration of the console server, read once from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `CONSOLE_HOST` | `127.0.0.1` |
//! | `CONSOLE_PORT` | `3000` |
//! | `RAG_SERVICE_URL` | `http://localhost:8080` |
//! | `CONSOLE_PROXY_TIMEOUT_SECS` | `60` |
//! | `CONSOLE_OPEN_BROWSER` | `true` |
//!
//! Unset or blank variables take the default. Values that are set but unparsable abort
//! startup with a [`ConfigError`] naming the variable.

use std::time::Duration;

use thiserror::Error;

pub const HOST_ENV: &str = "CONSOLE_HOST";
pub const PORT_ENV: &str = "CONSOLE_PORT";
pub const UPSTREAM_ENV: &str = "RAG_SERVICE_URL";
pub const TIMEOUT_ENV: &str = "CONSOLE_PROXY_TIMEOUT_SECS";
pub const OPEN_BROWSER_ENV: &str = "CONSOLE_OPEN_BROWSER";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be a port number between 1 and 65535, got '{value}'")]
    InvalidPort { key: &'static str, value: String },

    #[error("{key} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { key: &'static str, value: String },

    #[error("{key} must be true or false, got '{value}'")]
    InvalidFlag { key: &'static str, value: String },

    #[error("{key} must be an http:// or https:// URL, got '{value}'")]
    InvalidUpstream { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// RAG service base URL without a trailing slash.
    pub upstream: String,
    pub proxy_timeout: Duration,
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = get(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get(PORT_ENV) {
            None => DEFAULT_PORT,
            Some(value) => match value.parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::InvalidPort { key: PORT_ENV, value }),
            },
        };

        let upstream = match get(UPSTREAM_ENV) {
            None => DEFAULT_UPSTREAM.to_string(),
            Some(value) if value.starts_with("http://") || value.starts_with("https://") => {
                value.trim_end_matches('/').to_string()
            }
            Some(value) => return Err(ConfigError::InvalidUpstream { key: UPSTREAM_ENV, value }),
        };

        let proxy_timeout = match get(TIMEOUT_ENV) {
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout { key: TIMEOUT_ENV, value }),
            },
        };

        let open_browser = match get(OPEN_BROWSER_ENV) {
            None => true,
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => return Err(ConfigError::InvalidFlag { key: OPEN_BROWSER_ENV, value }),
            },
        };

        Ok(Self {
            host,
            port,
            upstream,
            proxy_timeout,
            open_browser,
        })
    }

    /// Address to open in the browser. Wildcard binds are reached through loopback.
    pub fn browser_url(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" => "127.0.0.1",
            host => host,
        };
        format!("http://{}:{}", host, self.port)
    }
}
