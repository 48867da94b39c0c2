use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::models::{Coordinates, TransportMode, TravelResult};

/// In-memory cache with a fixed time-to-live
///
/// Entries are invalidated lazily: an expired entry reads as a miss and is
/// overwritten on the next insert. Safe to share across tasks.
#[derive(Clone)]
pub struct CacheManager<V>
where
    V: Clone + Send + Sync + 'static,
{
    entries: moka::future::Cache<String, V>,
    ttl: Duration,
}

impl<V> CacheManager<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create a new cache holding at most `capacity` entries for `ttl`
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let entries = moka::future::CacheBuilder::new(capacity)
            .time_to_live(ttl)
            .build();

        Self { entries, ttl }
    }

    pub async fn get(&self, key: &str) -> Option<V> {
        let hit = self.entries.get(key).await;
        if hit.is_some() {
            tracing::trace!("Cache hit: {}", key);
        } else {
            tracing::trace!("Cache miss: {}", key);
        }
        hit
    }

    pub async fn set(&self, key: &str, value: V) {
        self.entries.insert(key.to_string(), value).await;
        tracing::trace!("Cache set: {}", key);
    }

    pub async fn delete(&self, key: &str) {
        self.entries.invalidate(key).await;
    }

    pub fn clear(&self) {
        self.entries.invalidate_all();
        tracing::debug!("Cache cleared");
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.entry_count(),
            ttl_secs: self.ttl.as_secs(),
        }
    }
}

/// Travel estimates keyed by origin text, destination and mode
pub type TravelTimeCache = CacheManager<TravelResult>;

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub ttl_secs: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for one travel estimate
    pub fn travel(from_location: &str, to: Coordinates, mode: &TransportMode) -> String {
        format!("travel:{}-{},{}-{}", from_location, to.lat, to.lng, mode)
    }

    /// Build a cache key for a destination forecast
    pub fn forecast(destination_id: &str) -> String {
        format!("forecast:{}", destination_id)
    }
}
