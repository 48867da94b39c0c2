use async_trait::async_trait;
use std::time::Duration;

use crate::core::distance::haversine_distance;
use crate::core::geocoder::Geocoder;
use crate::core::travel::{estimate_travel_time, TravelError, TravelTimeProvider};
use crate::models::{Coordinates, TransportMode, TravelResult};
use crate::services::cache::{CacheKey, CacheManager, TravelTimeCache};

/// Default lifetime of a cached travel estimate
pub const DEFAULT_TRAVEL_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Travel-time service: geocode the origin, measure the great-circle
/// distance, and estimate a duration per transport mode
///
/// Results are memoised per (origin text, destination, mode).
pub struct TravelTimeService {
    geocoder: Geocoder,
    cache: TravelTimeCache,
}

impl TravelTimeService {
    pub fn new(geocoder: Geocoder, cache: TravelTimeCache) -> Self {
        Self { geocoder, cache }
    }

    pub fn with_defaults() -> Self {
        Self::new(Geocoder::new(), CacheManager::new(10_000, DEFAULT_TRAVEL_CACHE_TTL))
    }

    pub fn cache(&self) -> &TravelTimeCache {
        &self.cache
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Estimate travel to `to` for each requested mode
    pub async fn calculate_travel_time(
        &self,
        from_location: &str,
        to: Coordinates,
        modes: &[TransportMode],
    ) -> Result<Vec<TravelResult>, TravelError> {
        let from = self.geocoder.geocode(from_location)?;
        let mut results = Vec::with_capacity(modes.len());

        for mode in modes {
            let key = CacheKey::travel(from_location, to, mode);
            if let Some(cached) = self.cache.get(&key).await {
                results.push(cached);
                continue;
            }

            let distance_km = haversine_distance(from, to);
            let duration_hours = estimate_travel_time(distance_km, mode);

            let result = TravelResult {
                distance_km: distance_km.round(),
                duration_hours: (duration_hours * 10.0).round() / 10.0,
                mode: mode.clone(),
            };

            self.cache.set(&key, result.clone()).await;
            results.push(result);
        }

        Ok(results)
    }
}

impl Default for TravelTimeService {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[async_trait]
impl TravelTimeProvider for TravelTimeService {
    async fn travel_times(
        &self,
        from_location: &str,
        to: Coordinates,
        modes: &[TransportMode],
    ) -> Result<Vec<TravelResult>, TravelError> {
        self.calculate_travel_time(from_location, to, modes).await
    }
}
