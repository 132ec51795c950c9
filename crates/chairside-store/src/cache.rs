//! TTL-gated key-value cache.
//!
//! The cache never reads the wall clock: callers supply a timestamp on
//! `put` and the current time on `get`. An entry strictly older than the
//! TTL reads as absent; `purge_expired` reclaims the memory.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::trace;

struct CacheEntry<V> {
    value: V,
    stored_at: DateTime<Utc>,
}

/// In-memory key-value cache with per-entry timestamps and a shared TTL.
pub struct TtlCache<V> {
    ttl: Duration,
    entries: HashMap<String, CacheEntry<V>>,
}

impl<V> TtlCache<V> {
    /// Create a cache whose entries expire `ttl` after their timestamp.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Store a value under `key` with the caller's timestamp.
    pub fn put(&mut self, key: impl Into<String>, value: V, timestamp: DateTime<Utc>) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                stored_at: timestamp,
            },
        );
    }

    /// Fetch a live value; entries older than the TTL read as absent.
    pub fn get(&self, key: &str, now: DateTime<Utc>) -> Option<&V> {
        let entry = self.entries.get(key)?;
        if self.is_expired(entry, now) {
            trace!(key, "cache entry expired");
            return None;
        }
        Some(&entry.value)
    }

    /// Drop every entry older than the TTL.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.signed_duration_since(entry.stored_at) <= ttl);
    }

    /// Number of stored entries, expired ones included until purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_expired(&self, entry: &CacheEntry<V>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(entry.stored_at) > self.ttl
    }
}
