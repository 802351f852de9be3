//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check capacity, statistics and eviction behavior.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_MAX_ENTRIES: usize = 100;

// == Strategies ==
/// Generates cache keys from a small alphabet so operations collide
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-h]{1,2}".prop_map(|s| s)
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,32}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations, hits and misses match what callers observed.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let mut store: CacheStore<String> = CacheStore::new(TEST_MAX_ENTRIES);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key, value);
                }
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, store.len(), "Total entries mismatch");

        let ratio = store.hit_ratio();
        prop_assert!((0.0..=1.0).contains(&ratio));
    }

    // The number of entries never exceeds the configured capacity.
    #[test]
    fn prop_capacity_enforcement(
        max_entries in 1usize..8,
        ops in prop::collection::vec(cache_op_strategy(), 1..120)
    ) {
        let mut store: CacheStore<String> = CacheStore::new(max_entries);

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(key, value);
                }
                CacheOp::Get { key } => {
                    store.get(&key);
                }
            }
            prop_assert!(
                store.len() <= max_entries,
                "Cache size {} exceeds max {}",
                store.len(),
                max_entries
            );
        }
    }

    // Overflowing a full cache evicts exactly one entry carrying the minimum count.
    #[test]
    fn prop_eviction_removes_minimum_access_count(
        keys in prop::collection::hash_set("[a-z]{3,8}", 2..10),
        reads in prop::collection::vec(0usize..10, 0..40),
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let capacity = keys.len();
        let mut store: CacheStore<String> = CacheStore::new(capacity);

        for key in &keys {
            store.set(key.clone(), format!("value_{}", key));
        }
        for index in reads {
            store.get(&keys[index % capacity]);
        }

        let counts: HashMap<String, u64> = keys
            .iter()
            .map(|key| (key.clone(), store.access_count(key).unwrap_or_default()))
            .collect();
        let minimum = counts.values().copied().min().unwrap_or_default();

        let evicted = store.set("NEWKEY", "fresh".to_string());

        prop_assert_eq!(store.len(), capacity);
        prop_assert_eq!(store.stats().evictions, 1);

        let evicted = evicted.expect("a full cache must evict");
        prop_assert_eq!(counts[&evicted], minimum);

        let survivors: HashSet<&String> = keys.iter().filter(|k| store.contains(k)).collect();
        prop_assert_eq!(survivors.len(), capacity - 1);
        prop_assert!(!survivors.contains(&evicted));
    }

    // Stored values come back unchanged until evicted.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store: CacheStore<String> = CacheStore::new(TEST_MAX_ENTRIES);

        store.set(key.clone(), value.clone());
        prop_assert_eq!(store.get(&key), Some(value));
    }
}
