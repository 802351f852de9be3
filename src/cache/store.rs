//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LFU frequency tracking.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, FrequencyTracker};

// == Cache Store ==
/// Bounded cache storage with least-frequently-used eviction.
///
/// Every operation is total: lookups that miss simply return `None`, and
/// inserts into a full cache make room by evicting the entry with the lowest
/// access count (the oldest insertion wins ties).
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// LFU eviction order
    frequency: FrequencyTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Sequence number handed to the next insert
    next_sequence: u64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            frequency: FrequencyTracker::new(),
            stats: CacheStats::new(max_entries),
            max_entries,
            next_sequence: 0,
        }
    }

    // == Set ==
    /// Stores a key-value pair with an access count of 1.
    ///
    /// If the key already exists its value is replaced and its access count
    /// reset. If the key is new and the cache is full, the least frequently
    /// used entry is evicted first; its key is returned.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<String> {
        let key = key.into();

        if self.max_entries == 0 {
            debug!(key = %key, "Zero-capacity cache, dropping insert");
            return None;
        }

        let mut evicted = None;
        if let Some(previous) = self.entries.remove(&key) {
            self.frequency
                .remove(&key, previous.access_count, previous.sequence);
        } else if self.entries.len() >= self.max_entries {
            evicted = self.evict_least_frequent();
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.frequency.insert(&key, 1, sequence);
        self.entries.insert(key, CacheEntry::new(value, sequence));
        self.stats.set_total_entries(self.entries.len());

        evicted
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A hit bumps the entry's access count; a miss is only counted.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get_mut(key) {
            Some(entry) => {
                let previous = entry.record_access();
                self.frequency
                    .reposition(key, entry.sequence, previous, entry.access_count);
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Hit Ratio ==
    /// Returns hits / (hits + misses), or 0.0 before any lookup.
    pub fn hit_ratio(&self) -> f64 {
        self.stats.hit_ratio()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Peek Helpers ==
    /// Checks for a key without touching counters.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the access count of a key without touching counters.
    pub fn access_count(&self, key: &str) -> Option<u64> {
        self.entries.get(key).map(|entry| entry.access_count)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    fn evict_least_frequent(&mut self) -> Option<String> {
        let key = self.frequency.evict_least_frequent()?;
        if let Some(entry) = self.entries.remove(&key) {
            debug!(
                key = %key,
                access_count = entry.access_count,
                "Evicted least frequently used entry"
            );
        }
        self.stats.record_eviction();
        Some(key)
    }
}
