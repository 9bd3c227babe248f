//! Configuration for the bounded cache

use crate::error::{CacheError, Result};
use serde::{Deserialize, Serialize};

/// Default capacity when none is specified
pub const DEFAULT_CAPACITY: usize = 10;

/// Configuration for a bounded cache
///
/// The only tunable is the capacity: the maximum number of entries the
/// cache holds before the oldest-inserted entry is evicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries held by the cache
    /// Must be at least 1; prevents unbounded memory growth
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Create a configuration with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Validate the configuration
    ///
    /// A zero capacity is rejected rather than clamped: a cache that can
    /// hold nothing would silently evict every insert.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidCapacity {
                capacity: self.capacity,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(CacheConfig::new(1).validate().is_ok());
        assert!(CacheConfig::new(10_000).validate().is_ok());

        let invalid = CacheConfig::new(0);
        assert!(matches!(
            invalid.validate(),
            Err(CacheError::InvalidCapacity { capacity: 0 })
        ));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = CacheConfig::new(42);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CacheConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
