//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::seq::DEFAULT_ITERATIVE_THRESHOLD;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Index cutoff above which the iterative strategy is selected
    pub iterative_threshold: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `ITERATIVE_THRESHOLD` - Strategy cutoff index (default: 1000)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            iterative_threshold: env::var("ITERATIVE_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ITERATIVE_THRESHOLD),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            iterative_threshold: DEFAULT_ITERATIVE_THRESHOLD,
        }
    }
}
