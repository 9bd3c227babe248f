//! # Bounded Caching
//!
//! This module implements a generic, thread-safe, fixed-capacity cache
//! with insertion-order eviction, used to memoize expensive artifacts
//! (compiled computation graphs, compiled kernels) keyed by their
//! signatures.
//!
//! ## Features
//!
//! - **Fixed Capacity**: Hard bound on the number of live entries
//! - **Insertion-Order Eviction**: When full, the oldest-inserted entry
//!   goes first; reads never refresh recency (this is not an LRU)
//! - **Thread Safety**: All operations run under a single reader/writer
//!   lock per cache instance
//! - **Generic**: Any `Eq + Hash + Clone` key, any `Clone` value
//!
//! ## Eviction Order
//!
//! Every write stamps its entry with a value from a monotonic serial
//! counter. Eviction removes the entry with the smallest serial, so
//! overwriting an existing key moves it to the back of the eviction
//! queue while a plain `get` does not.
//!
//! ## Example
//!
//! ```rust
//! use bounded_cache::BoundedCache;
//!
//! # fn example() -> bounded_cache::Result<()> {
//! let cache = BoundedCache::with_capacity(2)?;
//!
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.insert("c", 3); // evicts "a"
//!
//! assert_eq!(cache.get(&"a"), None);
//! assert_eq!(cache.get(&"b"), Some(2));
//! assert_eq!(cache.get(&"c"), Some(3));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod entry;
pub mod store;

pub use config::{CacheConfig, DEFAULT_CAPACITY};
pub use entry::CacheEntry;
pub use store::BoundedCache;
