//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BACKEND_URL: {0} (expected http:// or https://)")]
    InvalidBackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub port: u16,
    /// Base URL of the REST backend, without a trailing slash.
    pub backend_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl DashboardConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT` (default `8080`)
    /// - `BACKEND_URL` (default `http://localhost:3000`)
    /// - `BACKEND_TIMEOUT_SECS` (default `10`)
    /// - `BACKEND_CONNECT_TIMEOUT_SECS` (default `5`)
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number or `BACKEND_URL`
    /// is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let backend_url = parse_backend_url(lookup("BACKEND_URL").as_deref())?;
        let request_timeout =
            Duration::from_secs(parse_u64(lookup("BACKEND_TIMEOUT_SECS"), DEFAULT_BACKEND_TIMEOUT_SECS));
        let connect_timeout = Duration::from_secs(parse_u64(
            lookup("BACKEND_CONNECT_TIMEOUT_SECS"),
            DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
        ));

        Ok(Self { port, backend_url, request_timeout, connect_timeout })
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let raw = raw.map_or(DEFAULT_BACKEND_URL, str::trim);
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidBackendUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
