//! Configuration Module
//!
//! Handles loading gateway configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in milliseconds for entries cached without an explicit TTL
    pub default_ttl_ms: u64,
    /// Background cleanup interval in seconds
    pub cleanup_interval_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the backend service responses are fetched from
    pub backend_url: String,
    /// Timeout in seconds for a single backend request
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `CLEANUP_INTERVAL_SECS` - Sweep frequency in seconds (default: 600)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `BACKEND_URL` - Backend base URL (default: http://localhost:8080)
    /// - `UPSTREAM_TIMEOUT_SECS` - Backend request timeout (default: 10)
    ///
    /// Unset or unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl_ms: env_or("DEFAULT_TTL_MS", defaults.default_ttl_ms),
            cleanup_interval_secs: env_or("CLEANUP_INTERVAL_SECS", defaults.cleanup_interval_secs),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            backend_url: env::var("BACKEND_URL").unwrap_or(defaults.backend_url),
            upstream_timeout_secs: env_or("UPSTREAM_TIMEOUT_SECS", defaults.upstream_timeout_secs),
        }
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl_ms: 300_000,
            cleanup_interval_secs: 600,
            server_port: 3000,
            backend_url: "http://localhost:8080".to_string(),
            upstream_timeout_secs: 10,
        }
    }
}
