//! TTL Cache Store Module
//!
//! HashMap storage with absolute-expiry entries, lazy eviction on access and
//! an explicit sweep.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

/// A cache shared between tasks. Lookups need the write lock since they may
/// evict.
pub type SharedCache<V, C = SystemClock> = Arc<RwLock<TtlCache<V, C>>>;

// == TTL Cache ==
/// In-memory key-value cache where every entry expires after its TTL.
///
/// There is no capacity bound and no LRU ordering: an entry leaves the cache
/// only through `clear`, through `cleanup`, or when a lookup finds it stale.
#[derive(Debug)]
pub struct TtlCache<V, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Lookup statistics
    stats: CacheStats,
    /// TTL applied when `set` is called without one
    default_ttl: Duration,
    /// Time source for stamping and expiring entries
    clock: C,
}

impl<V: Clone> TtlCache<V> {
    // == Constructor ==
    /// Creates an empty cache on the system clock.
    pub fn new(default_ttl: Duration) -> Self {
        Self::with_clock(default_ttl, SystemClock)
    }
}

impl<V: Clone, C: Clock> TtlCache<V, C> {
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(default_ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
            clock,
        }
    }

    /// Wraps the cache for sharing across tasks.
    pub fn into_shared(self) -> SharedCache<V, C> {
        Arc::new(RwLock::new(self))
    }

    // == Set ==
    /// Stores `value` under `key` for `ttl` (or the default TTL).
    ///
    /// Any existing entry for the key is replaced outright, value and expiry
    /// both; nothing from the previous entry carries over.
    pub fn set(&mut self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let key = key.into();
        debug_assert!(!key.is_empty(), "cache keys must be non-empty");

        let ttl = ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(value, self.clock.now_ms(), ttl);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a clone of the live value for `key`.
    ///
    /// A stale entry is removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();
        let value = self.live_entry(key, now).map(|entry| entry.value.clone());

        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }
        value
    }

    // == Has ==
    /// Checks for a live entry without retrieving it.
    ///
    /// Evicts a stale entry like `get` does but leaves hit/miss counters alone.
    pub fn has(&mut self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.live_entry(key, now).is_some()
    }

    // == TTL Remaining ==
    /// Returns how long the live entry for `key` has left.
    pub fn ttl_remaining(&mut self, key: &str) -> Option<Duration> {
        let now = self.clock.now_ms();
        self.live_entry(key, now).map(|entry| entry.ttl_remaining(now))
    }

    // == Clear ==
    /// Drops every entry, live or not.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        debug!(dropped, "Cache cleared");
    }

    // == Cleanup ==
    /// Removes all expired entries and returns how many were removed.
    pub fn cleanup(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();

        self.entries.retain(|_, entry| !entry.is_expired(now));

        let removed = before - self.entries.len();
        self.stats.record_expired(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// TTL used when `set` is called without one.
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Number of stored entries, including expired ones not yet removed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Live Entry ==
    /// Looks up `key`, evicting it if it is stale at `now`.
    fn live_entry(&mut self, key: &str, now: u64) -> Option<&CacheEntry<V>> {
        let expired = self.entries.get(key)?.is_expired(now);

        if expired {
            self.entries.remove(key);
            self.stats.record_expired(1);
            self.stats.set_total_entries(self.entries.len());
            return None;
        }

        self.entries.get(key)
    }
}
