//! Frequency Tracker Module
//!
//! Implements Least Frequently Used ordering for cache eviction.

use std::collections::BTreeSet;

// == Frequency Tracker ==
/// Orders keys by access count for LFU eviction.
///
/// Keys are stored as `(access_count, sequence, key)` tuples so that:
/// - First = lowest access count, oldest insertion among equals
/// - Last = highest access count
#[derive(Debug, Default)]
pub struct FrequencyTracker {
    order: BTreeSet<(u64, u64, String)>,
}

impl FrequencyTracker {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: BTreeSet::new(),
        }
    }

    // == Insert ==
    /// Starts tracking a key at the given count and insertion sequence.
    pub fn insert(&mut self, key: &str, count: u64, sequence: u64) {
        self.order.insert((count, sequence, key.to_string()));
    }

    // == Reposition ==
    /// Moves a tracked key from `old_count` to `new_count`.
    pub fn reposition(&mut self, key: &str, sequence: u64, old_count: u64, new_count: u64) {
        let mut slot = (old_count, sequence, key.to_string());
        self.order.remove(&slot);
        slot.0 = new_count;
        self.order.insert(slot);
    }

    // == Remove ==
    /// Stops tracking a key.
    pub fn remove(&mut self, key: &str, count: u64, sequence: u64) {
        self.order.remove(&(count, sequence, key.to_string()));
    }

    // == Evict Least Frequent ==
    /// Returns and removes the least frequently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_least_frequent(&mut self) -> Option<String> {
        self.order.pop_first().map(|(_, _, key)| key)
    }

    // == Peek Least Frequent ==
    /// Returns the next eviction candidate without removing it.
    pub fn peek_least_frequent(&self) -> Option<&str> {
        self.order.first().map(|(_, _, key)| key.as_str())
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
