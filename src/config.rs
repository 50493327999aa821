//! Configuration Module
//!
//! Handles loading Pokedex settings from environment variables.

use std::env;
use std::time::Duration;

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache expiry interval in milliseconds, also the sweep period
    pub cache_interval_ms: u64,
    /// Root of the PokeAPI, without a trailing slash
    pub api_base_url: String,
    /// Number of location areas shown per `map`/`mapb` page
    pub page_size: usize,
    /// Per-request HTTP timeout in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL_MS` - Cache expiry interval (default: 5000)
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `PAGE_SIZE` - Location areas per page (default: 20)
    /// - `HTTP_TIMEOUT_SECS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval_ms: parse_var("CACHE_INTERVAL_MS").unwrap_or(defaults.cache_interval_ms),
            api_base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            page_size: parse_var("PAGE_SIZE")
                .filter(|&size| size > 0)
                .unwrap_or(defaults.page_size),
            http_timeout_secs: parse_var("HTTP_TIMEOUT_SECS").unwrap_or(defaults.http_timeout_secs),
        }
    }

    pub fn cache_interval(&self) -> Duration {
        Duration::from_millis(self.cache_interval_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_ms: 5000,
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
            page_size: 20,
            http_timeout_secs: 10,
        }
    }
}
