//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with access counting.

// == Cache Entry ==
/// Represents a single cache entry with value and frequency metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Number of times the entry has been stored or read (always >= 1)
    pub access_count: u64,
    /// Insertion sequence number, lower = inserted earlier
    pub sequence: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry with an access count of 1.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `sequence` - Insertion order assigned by the store
    pub fn new(value: V, sequence: u64) -> Self {
        Self {
            value,
            access_count: 1,
            sequence,
        }
    }

    // == Record Access ==
    /// Bumps the access count, returning the previous count.
    pub fn record_access(&mut self) -> u64 {
        let previous = self.access_count;
        self.access_count = self.access_count.saturating_add(1);
        previous
    }
}
