//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::cache::DEFAULT_MAX_ENTRIES;
use crate::payment::DEFAULT_LARGE_TRANSACTION_THRESHOLD;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the discount cache can hold
    pub cache_max_entries: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Payment amounts above this produce a warning
    pub large_transaction_threshold: Decimal,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `LARGE_TRANSACTION_THRESHOLD` - Warning threshold for payments (default: 10000.00)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_max_entries: env_or("CACHE_MAX_ENTRIES", defaults.cache_max_entries),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            large_transaction_threshold: env_or(
                "LARGE_TRANSACTION_THRESHOLD",
                defaults.large_transaction_threshold,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_max_entries: DEFAULT_MAX_ENTRIES,
            server_port: 5000,
            large_transaction_threshold: DEFAULT_LARGE_TRANSACTION_THRESHOLD,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
