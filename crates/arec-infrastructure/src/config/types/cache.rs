//! Result cache configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{CACHE_DEFAULT_CAPACITY, CACHE_DEFAULT_TTL_SECS};

/// Result cache configuration. Disabled by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    /// Maximum number of cached results
    pub capacity: u64,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            capacity: CACHE_DEFAULT_CAPACITY,
            ttl_secs: CACHE_DEFAULT_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}
