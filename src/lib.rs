//! # Bounded Cache (bounded-cache)
//!
//! A small, generic, thread-safe, fixed-capacity key-value cache with
//! insertion-order eviction.
//!
//! ## Features
//!
//! - Fixed capacity with oldest-first eviction (FIFO-style, not LRU)
//! - Safe under arbitrary concurrent access from multiple threads
//! - Reads are side-effect free and never refresh an entry's recency
//! - Cheap cloneable handles sharing one underlying store
//! - No I/O, no persistence, no background tasks
//!
//! Intended as a shared utility for memoizing expensive compiled
//! artifacts (computation graphs, kernels) keyed by shape/dtype
//! signatures, but fully generic over what it stores.
//!
//! ## Example
//!
//! ```rust
//! use bounded_cache::{BoundedCache, CacheConfig};
//!
//! # fn example() -> bounded_cache::Result<()> {
//! let cache = BoundedCache::new(CacheConfig::new(128))?;
//!
//! cache.insert("f32x[4,8]".to_string(), "compiled kernel".to_string());
//!
//! if let Some(kernel) = cache.get(&"f32x[4,8]".to_string()) {
//!     println!("Cache hit: {}", kernel);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrent Use
//!
//! Clone the cache to hand a handle to each thread; all handles share
//! the same store and the same capacity bound.
//!
//! ```rust
//! use bounded_cache::BoundedCache;
//! use std::thread;
//!
//! # fn example() -> bounded_cache::Result<()> {
//! let cache = BoundedCache::with_capacity(64)?;
//!
//! let writer = {
//!     let cache = cache.clone();
//!     thread::spawn(move || {
//!         cache.insert(1, "one");
//!     })
//! };
//! writer.join().unwrap();
//!
//! assert_eq!(cache.get(&1), Some("one"));
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;

// Re-export main types for convenience
pub use cache::{BoundedCache, CacheConfig, CacheEntry, DEFAULT_CAPACITY};
pub use error::{CacheError, Result};
