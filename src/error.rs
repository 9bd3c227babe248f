//! Error types for cache operations
//!
//! This module defines custom error types for the bounded-cache library.
//! Only construction can fail; the cache operations themselves are
//! infallible.

use thiserror::Error;

/// Main error type for cache operations
#[derive(Error, Debug)]
pub enum CacheError {
    /// Configuration error - the requested capacity is not usable
    #[error("Invalid capacity: {capacity} (capacity must be at least 1)")]
    InvalidCapacity { capacity: usize },
}

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;
