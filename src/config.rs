//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;

/// Public PokéAPI root used when `API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Page size used for both fetching and pagination bounds.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the remote REST API (no trailing slash)
    pub api_base_url: String,
    /// Number of Pokémon per page
    pub page_size: u32,
    /// Seconds a cached page stays fresh
    pub cache_ttl: u64,
    /// Maximum number of pages held in memory
    pub max_cached_pages: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Directory for the persisted cache slot, None keeps it in memory only
    pub cache_dir: Option<PathBuf>,
    /// Timeout in seconds for each outgoing request
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_BASE_URL` - Remote API root (default: https://pokeapi.co/api/v2)
    /// - `PAGE_SIZE` - Pokémon per page (default: 12)
    /// - `CACHE_TTL` - Page freshness in seconds (default: 300)
    /// - `MAX_CACHED_PAGES` - In-memory page capacity (default: 100)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `CACHE_DIR` - Directory for the persisted slot (default: unset)
    /// - `HTTP_TIMEOUT` - Outgoing request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_base_url: env::var("API_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            page_size: parse_var::<u32>("PAGE_SIZE")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.page_size),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            max_cached_pages: parse_var::<usize>("MAX_CACHED_PAGES")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.max_cached_pages),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cleanup_interval: parse_var::<u64>("CLEANUP_INTERVAL")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.cleanup_interval),
            cache_dir: env::var("CACHE_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            http_timeout: parse_var::<u64>("HTTP_TIMEOUT")
                .filter(|v| *v > 0)
                .unwrap_or(defaults.http_timeout),
        }
    }

    /// Cache TTL as a Duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            cache_ttl: DEFAULT_TTL_SECS,
            max_cached_pages: 100,
            server_port: 3000,
            cleanup_interval: 60,
            cache_dir: None,
            http_timeout: 10,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
