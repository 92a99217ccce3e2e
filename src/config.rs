//! Configuration Module
//!
//! Loads cache and stress-run settings from environment variables.

use std::env;

use crate::cache::DEFAULT_CACHE_SIZE;
use crate::error::{CacheError, Result};

/// Runtime configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub cache_size: usize,
    /// Number of concurrent workers in a stress run
    pub stress_threads: usize,
    /// Insert/lookup rounds per worker
    pub stress_iterations: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LRU_CACHE_SIZE` - Maximum cache entries (default: 100)
    /// - `STRESS_THREADS` - Concurrent workers (default: 20)
    /// - `STRESS_ITERATIONS` - Rounds per worker (default: 20000)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_size: env_or("LRU_CACHE_SIZE", defaults.cache_size),
            stress_threads: env_or("STRESS_THREADS", defaults.stress_threads),
            stress_iterations: env_or("STRESS_ITERATIONS", defaults.stress_iterations),
        }
    }

    /// Rejects zero values.
    pub fn validate(&self) -> Result<()> {
        if self.cache_size == 0 {
            return Err(CacheError::InvalidArgument(
                "LRU_CACHE_SIZE must be at least 1".to_string(),
            ));
        }
        if self.stress_threads == 0 {
            return Err(CacheError::InvalidArgument(
                "STRESS_THREADS must be at least 1".to_string(),
            ));
        }
        if self.stress_iterations == 0 {
            return Err(CacheError::InvalidArgument(
                "STRESS_ITERATIONS must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
            stress_threads: 20,
            stress_iterations: 20_000,
        }
    }
}

fn env_or(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
