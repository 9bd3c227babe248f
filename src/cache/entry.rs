//! Cache entry management

/// A cached value together with its insertion serial
///
/// The serial is a logical timestamp assigned from the cache's monotonic
/// counter at the moment the entry is written. Eviction removes the entry
/// with the smallest serial; the serial is never updated in place, so
/// re-inserting a key produces a fresh entry with a fresh serial.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached value
    pub value: V,

    /// Logical insertion timestamp (relative order only, not wall time)
    pub serial: u64,
}

impl<V> CacheEntry<V> {
    /// Create a new entry with the given serial
    pub fn new(value: V, serial: u64) -> Self {
        Self { value, serial }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("compiled", 7);
        assert_eq!(entry.value, "compiled");
        assert_eq!(entry.serial, 7);
    }

    #[test]
    fn test_entry_ordering_by_serial() {
        let older = CacheEntry::new(1, 0);
        let newer = CacheEntry::new(2, 1);
        assert!(older.serial < newer.serial);
    }
}
