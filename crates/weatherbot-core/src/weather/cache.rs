//! Time-bounded weather snapshot cache.
//!
//! `WeatherCache` is a concurrent map backed by `DashMap`, keyed by the city
//! string exactly as the user typed it (after trimming). Snapshots are
//! cloned on read so no `DashMap` guard outlives a call, which keeps the
//! cache safe to use from handlers that await afterwards.
//!
//! The map is capacity-bounded. Inserting a new city into a full cache
//! first drops stale entries, then the entry with the oldest `fetched_at`.
//! The bound is soft under concurrent inserts of distinct cities.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use weatherbot_types::weather::WeatherSnapshot;

#[derive(Debug, Clone)]
struct CacheEntry {
    snapshot: WeatherSnapshot,
    fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_fresh(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now - self.fetched_at < ttl
    }
}

/// Shared weather cache. Cloning produces a view of the same map.
#[derive(Debug, Clone)]
pub struct WeatherCache {
    entries: Arc<DashMap<String, CacheEntry>>,
    ttl: TimeDelta,
    capacity: usize,
}

impl WeatherCache {
    /// Create an empty cache.
    ///
    /// A `capacity` of zero is treated as one.
    pub fn new(ttl_secs: u64, capacity: usize) -> Self {
        let ttl = i64::try_from(ttl_secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);

        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Return a copy of the cached snapshot for `city` if it is still fresh at `now`.
    pub fn get_fresh(&self, city: &str, now: DateTime<Utc>) -> Option<WeatherSnapshot> {
        self.entries
            .get(city)
            .filter(|entry| entry.is_fresh(now, self.ttl))
            .map(|entry| entry.snapshot.clone())
    }

    /// Store or overwrite the snapshot for `city`, fetched at `now`.
    pub fn insert(&self, city: &str, snapshot: WeatherSnapshot, now: DateTime<Utc>) {
        if !self.entries.contains_key(city) && self.entries.len() >= self.capacity {
            self.make_room(now);
        }

        self.entries.insert(
            city.to_string(),
            CacheEntry {
                snapshot,
                fetched_at: now,
            },
        );
    }

    /// Timestamp of the cached entry for `city`, fresh or not.
    pub fn fetched_at(&self, city: &str) -> Option<DateTime<Utc>> {
        self.entries.get(city).map(|entry| entry.fetched_at)
    }

    /// Number of entries, including stale ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn make_room(&self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        self.entries.retain(|_, entry| entry.is_fresh(now, ttl));

        if self.entries.len() < self.capacity {
            return;
        }

        // Collect the key first; removing while iterating would deadlock the shard.
        let oldest = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().fetched_at)
            .map(|entry| entry.key().clone());

        if let Some(key) = oldest {
            tracing::debug!(city = %key, "Evicting oldest weather cache entry");
            self.entries.remove(&key);
        }
    }
}
