// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Keyed in-memory caches for immutable chain data
//!
//! All three process caches (receipts by transaction hash, sync-committee
//! sets by slot, validator rosters by slot) are instances of one generic
//! store. The cached data describes finalized chain history, which never
//! changes, so entries are valid for the lifetime of the process and the
//! store has neither eviction nor expiry.
//!
//! The lack of eviction means memory grows with the number of distinct
//! keys ever queried. Known trade-off: a scalability ceiling for the
//! target workload, not a correctness concern.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Cache access statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups that found an entry
    pub hits: u64,
    /// Number of lookups that found nothing
    pub misses: u64,
    /// Current number of entries
    pub entries: usize,
}

impl CacheStats {
    /// Hit rate as a percentage (0.0 when the cache was never read)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0.0;
        }
        (self.hits as f64 / total as f64) * 100.0
    }
}

/// A concurrent map from immutable key to immutable value
///
/// Reads take a shared lock so many readers proceed in parallel; writes
/// take the exclusive lock. The lock is scoped to a single `get` or
/// `insert` and is never held across I/O or an `.await` point.
///
/// `insert` overwrites unconditionally. Racing writers for the same key
/// are harmless: the underlying chain data a key maps to is immutable, so
/// they always write the same value and last-writer-wins is correct.
///
/// # Examples
///
/// ```
/// use slotscan::SlotCache;
///
/// let cache: SlotCache<u64, Vec<String>> = SlotCache::new();
/// assert!(cache.get(&42).is_none());
///
/// cache.insert(42, vec!["1234".to_string()]);
/// assert_eq!(cache.get(&42).unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SlotCache<K, V> {
    entries: RwLock<HashMap<K, V>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K, V> SlotCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty cache
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a value, cloning it out of the store
    pub fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        let value = entries.get(key).cloned();
        if value.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        value
    }

    /// Insert a value, overwriting any existing entry for the key
    pub fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key, value);
    }

    /// Current number of entries
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// True when the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of access statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}
