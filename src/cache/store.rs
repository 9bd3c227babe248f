//! Main cache store implementation with insertion-order eviction

use crate::cache::{config::CacheConfig, entry::CacheEntry};
use crate::error::Result;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Fixed-capacity cache with insertion-order eviction
///
/// This implementation provides:
/// - Thread-safe access via a reader/writer lock (shared reads, exclusive
///   writes)
/// - Eviction of the oldest-inserted entry when capacity is exceeded
/// - A monotonic serial counter that orders entries by write time
///
/// Unlike an LRU cache, reads never refresh an entry's recency: only a
/// fresh `insert` for the same key does. Cloning the cache yields another
/// handle to the same underlying store.
pub struct BoundedCache<K, V> {
    /// Cache configuration
    config: CacheConfig,

    /// Internal storage
    store: Arc<RwLock<CacheStore<K, V>>>,
}

/// Internal cache storage
struct CacheStore<K, V> {
    /// Main storage: key -> entry
    entries: HashMap<K, CacheEntry<V>>,

    /// Serial assigned to the next write; only resets on wrap or clear
    next_serial: u64,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a new cache with the given configuration
    ///
    /// Returns [`CacheError::InvalidCapacity`](crate::CacheError) if the
    /// configured capacity is zero.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;
        info!("Initializing bounded cache with capacity {}", config.capacity);

        let store = CacheStore {
            entries: HashMap::new(),
            next_serial: 0,
        };

        Ok(Self {
            config,
            store: Arc::new(RwLock::new(store)),
        })
    }

    /// Create a cache holding at most `capacity` entries
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(CacheConfig::new(capacity))
    }

    /// Get a value from the cache
    ///
    /// Returns a clone of the stored value, or `None` if the key is
    /// absent. Reads have no effect on eviction order.
    pub fn get(&self, key: &K) -> Option<V> {
        let store = self.store.read();
        store.entries.get(key).map(|entry| entry.value.clone())
    }

    /// Insert or overwrite the value for `key`
    ///
    /// The entry receives the next serial, so overwriting an existing key
    /// makes it the most recently inserted. If the insert pushes the cache
    /// past its capacity, the entry with the smallest serial is removed.
    pub fn insert(&self, key: K, value: V) {
        let mut store = self.store.write();

        // Handle wrap on the serial counter: sacrifice the whole cache
        // rather than hand out a colliding serial.
        if store.next_serial == u64::MAX {
            warn!(
                "Serial counter exhausted, clearing {} cache entries",
                store.entries.len()
            );
            store.entries.clear();
            store.next_serial = 0;
        }

        let serial = store.next_serial;
        store.entries.insert(key, CacheEntry::new(value, serial));
        store.next_serial += 1;

        // A single insert grows the map by at most one, so one eviction
        // is enough to restore the bound.
        if store.entries.len() > self.config.capacity {
            store.evict_oldest();
        }
    }

    /// Remove a specific entry from the cache
    ///
    /// Returns the removed value, or `None` if the key was absent.
    /// Removal never triggers an eviction.
    pub fn remove(&self, key: &K) -> Option<V> {
        let mut store = self.store.write();
        store.entries.remove(key).map(|entry| entry.value)
    }

    /// Clear all entries and reset the serial counter
    pub fn clear(&self) {
        let mut store = self.store.write();
        let count = store.entries.len();
        store.entries.clear();
        store.next_serial = 0;

        info!("Cleared {} entries from cache", count);
    }

    /// Check if a key exists in the cache
    pub fn contains_key(&self, key: &K) -> bool {
        let store = self.store.read();
        store.entries.contains_key(key)
    }

    /// Get number of entries in cache
    pub fn len(&self) -> usize {
        let store = self.store.read();
        store.entries.len()
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        let store = self.store.read();
        store.entries.is_empty()
    }

    /// Maximum number of entries the cache holds
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Remove the entry with the smallest serial
    ///
    /// Serials are unique among live entries (a wrap clears the map), so
    /// the minimum is unambiguous in normal operation.
    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.serial)
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            if let Some(entry) = self.entries.remove(&key) {
                debug!("Evicted oldest cache entry (serial {})", entry.serial);
            }
        }
    }
}

impl<K, V> Default for BoundedCache<K, V> {
    fn default() -> Self {
        // The default configuration always validates.
        Self {
            config: CacheConfig::default(),
            store: Arc::new(RwLock::new(CacheStore {
                entries: HashMap::new(),
                next_serial: 0,
            })),
        }
    }
}

impl<K, V> Clone for BoundedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            store: Arc::clone(&self.store),
        }
    }
}
