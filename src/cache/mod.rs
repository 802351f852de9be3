//! Cache Module
//!
//! Provides a bounded in-memory cache with least-frequently-used eviction.

mod entry;
mod frequency;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use frequency::FrequencyTracker;
pub use stats::CacheStats;
pub use store::CacheStore;

/// Cache holding JSON values, as shared by the HTTP layer.
pub type JsonCache = CacheStore<serde_json::Value>;

// == Public Constants ==
/// Default capacity of the service cache
pub const DEFAULT_MAX_ENTRIES: usize = 1000;
