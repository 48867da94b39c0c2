use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::models::{Coordinates, TransportMode, TravelResult};

/// Errors raised while estimating travel to a destination
///
/// The ranker recovers from both through the coarse heuristic estimate.
#[derive(Debug, Error)]
pub enum TravelError {
    #[error("Could not find coordinates for location: {0:?}")]
    GeocodeNotFound(String),

    #[error("Travel time calculation exceeded {0:?}")]
    TimeoutExceeded(Duration),
}

/// Average cruise speed for commercial flights
const FLIGHT_CRUISE_KMH: f64 = 900.0;
const CAR_KMH: f64 = 80.0;
const TRAIN_KMH: f64 = 120.0;
const BUS_KMH: f64 = 60.0;

/// Airport procedures in hours, growing with flight length
#[inline]
fn airport_overhead_hours(distance_km: f64) -> f64 {
    if distance_km > 15_000.0 {
        6.0
    } else if distance_km > 8_000.0 {
        5.0
    } else if distance_km > 3_000.0 {
        4.0
    } else {
        3.0
    }
}

/// Estimate door-to-door travel time in hours for a distance and mode
///
/// Flights add airport overhead on top of cruise time; ground modes are a
/// plain average speed. Unmodelled modes travel at car speed.
pub fn estimate_travel_time(distance_km: f64, mode: &TransportMode) -> f64 {
    match mode {
        TransportMode::Flight => distance_km / FLIGHT_CRUISE_KMH + airport_overhead_hours(distance_km),
        TransportMode::Train => distance_km / TRAIN_KMH,
        TransportMode::Bus => distance_km / BUS_KMH,
        TransportMode::Car | TransportMode::Other(_) => distance_km / CAR_KMH,
    }
}

/// Coarse travel-time guess (hours) used when geocoding or estimation fails
///
/// Matches a few well-known origin keywords and buckets the destination by
/// absolute latitude. Always returns a value between 2 and 12 hours.
pub fn estimate_simple_travel(destination: Coordinates, from_location: &str) -> f64 {
    let origin = from_location.to_lowercase();
    let mentions = |needles: &[&str]| needles.iter().any(|n| origin.contains(n));

    let is_uk = mentions(&["london", "uk", "england"]);
    let is_europe = mentions(&["paris", "amsterdam", "berlin"]);
    let is_us = mentions(&["new york", "los angeles", "usa"]);

    let lat = destination.lat.abs();

    if is_uk {
        if lat > 40.0 && lat < 65.0 {
            2.0
        } else if lat > 20.0 && lat < 40.0 {
            6.0
        } else if lat < 20.0 {
            12.0
        } else {
            8.0
        }
    } else if is_europe {
        if lat > 40.0 && lat < 65.0 {
            3.0
        } else if lat > 20.0 && lat < 40.0 {
            5.0
        } else if lat < 20.0 {
            11.0
        } else {
            7.0
        }
    } else if is_us {
        if lat > 25.0 && lat < 50.0 {
            5.0
        } else if lat < 25.0 {
            8.0
        } else {
            12.0
        }
    } else {
        8.0
    }
}

/// Source of travel estimates from a free-text origin to a destination
#[async_trait]
pub trait TravelTimeProvider: Send + Sync {
    /// One result per requested mode, in the order given
    async fn travel_times(
        &self,
        from_location: &str,
        to: Coordinates,
        modes: &[TransportMode],
    ) -> Result<Vec<TravelResult>, TravelError>;
}

/// Pick the fastest option; ties keep the earliest entry
pub fn select_fastest(results: &[TravelResult]) -> Option<&TravelResult> {
    results.iter().fold(None, |fastest: Option<&TravelResult>, current| match fastest {
        Some(best) if best.duration_hours <= current.duration_hours => Some(best),
        _ => Some(current),
    })
}
