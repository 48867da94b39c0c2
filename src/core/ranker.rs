use futures_util::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::core::{
    filters::{has_positive_score, within_travel_budget},
    scoring::calculate_score,
    travel::{estimate_simple_travel, select_fastest, TravelError, TravelTimeProvider},
};
use crate::models::{Destination, Preferences, RankedDestination, TransportMode, TravelResult};

/// Default budget for one destination's travel lookup
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(2);

const NUMBEO_BASE_URL: &str = "https://www.numbeo.com/cost-of-living/in";

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("Invalid preferences: {0}")]
    InvalidPreferences(#[from] ValidationErrors),

    #[error("Malformed preferences: {0}")]
    MalformedPreferences(#[from] serde_json::Error),
}

/// Decode and validate raw preferences from a request body
///
/// Wrong types, out-of-range integers and missing fields surface as
/// `MalformedPreferences` rather than failing the request.
pub fn parse_preferences(value: serde_json::Value) -> Result<Preferences, RankingError> {
    let preferences: Preferences = serde_json::from_value(value)?;
    preferences.validate()?;
    Ok(preferences)
}

/// Every destination as-is, without travel time or score
pub fn unranked(destinations: &[Destination]) -> Vec<RankedDestination> {
    destinations.iter().map(RankedDestination::unranked).collect()
}

/// Ranking orchestrator - implements the travel-filter-score pipeline
///
/// # Pipeline Stages
/// 1. Travel lookup per destination (concurrent, time-bounded, heuristic fallback)
/// 2. Hard travel-time filter
/// 3. Scoring and positive-score filter
/// 4. Stable descending sort
#[derive(Clone)]
pub struct Ranker {
    provider: Arc<dyn TravelTimeProvider>,
    lookup_timeout: Duration,
}

impl Ranker {
    pub fn new(provider: Arc<dyn TravelTimeProvider>, lookup_timeout: Duration) -> Self {
        Self {
            provider,
            lookup_timeout,
        }
    }

    pub fn with_default_timeout(provider: Arc<dyn TravelTimeProvider>) -> Self {
        Self::new(provider, DEFAULT_LOOKUP_TIMEOUT)
    }

    pub fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    /// Rank destinations for a traveller
    ///
    /// # Arguments
    /// * `destinations` - Candidate destinations; never mutated
    /// * `preferences` - The traveller's preferences
    ///
    /// # Returns
    /// Copies of the surviving destinations with travel time, cost link and
    /// score attached, most recommended first. Equal scores keep input order.
    pub async fn rank(
        &self,
        destinations: &[Destination],
        preferences: &Preferences,
    ) -> Result<Vec<RankedDestination>, RankingError> {
        preferences.validate()?;

        // Stage 1: travel lookups, results stay aligned with input order
        let lookups = destinations
            .iter()
            .map(|destination| self.resolve_travel(destination, preferences));
        let travel_times = join_all(lookups).await;

        let mut ranked: Vec<RankedDestination> = destinations
            .iter()
            .zip(travel_times)
            // Stage 2: hard travel-time filter
            .filter(|(destination, travel)| {
                let keep = within_travel_budget(travel, preferences);
                if !keep {
                    tracing::debug!(
                        "Dropping {}: {:.1}h exceeds {:.1}h budget",
                        destination.id,
                        travel.duration_hours,
                        preferences.max_travel_time
                    );
                }
                keep
            })
            // Stage 3: scoring
            .filter_map(|(destination, travel)| {
                let score = calculate_score(destination, preferences);
                if !has_positive_score(score) {
                    return None;
                }

                Some(RankedDestination {
                    destination: destination.clone(),
                    travel_time: Some(travel),
                    numbeo_url: Some(numbeo_url(destination)),
                    score: Some(score),
                    recommendation_score: None,
                })
            })
            .collect();

        // Stage 4: stable sort, descending by score
        ranked.sort_by(|a, b| {
            b.score
                .unwrap_or(0.0)
                .partial_cmp(&a.score.unwrap_or(0.0))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::info!(
            "Ranked {} of {} destinations from {:?}",
            ranked.len(),
            destinations.len(),
            preferences.current_location
        );

        Ok(ranked)
    }

    /// Rank, or fall back to every destination unranked on failure
    ///
    /// Returns the list together with whether ranking succeeded.
    pub async fn rank_or_unranked(
        &self,
        destinations: &[Destination],
        preferences: &Preferences,
    ) -> (Vec<RankedDestination>, bool) {
        match self.rank(destinations, preferences).await {
            Ok(ranked) => (ranked, true),
            Err(e) => {
                tracing::warn!("Ranking failed, returning unranked destinations: {}", e);
                (unranked(destinations), false)
            }
        }
    }

    /// Fastest requested mode within the lookup budget, else the heuristic
    async fn resolve_travel(&self, destination: &Destination, preferences: &Preferences) -> TravelResult {
        let lookup = self.provider.travel_times(
            &preferences.current_location,
            destination.coordinates,
            &preferences.transport_modes,
        );

        let outcome = match tokio::time::timeout(self.lookup_timeout, lookup).await {
            Ok(result) => result,
            Err(_) => Err(TravelError::TimeoutExceeded(self.lookup_timeout)),
        };

        match outcome {
            Ok(results) => {
                if let Some(fastest) = select_fastest(&results) {
                    tracing::debug!(
                        "{}: {} in {:.1}h",
                        destination.id,
                        fastest.mode,
                        fastest.duration_hours
                    );
                    return fastest.clone();
                }
                tracing::debug!("{}: no travel options, using estimate", destination.id);
            }
            Err(e) => {
                tracing::warn!("{}: {}, using estimate", destination.id, e);
            }
        }

        fallback_travel(destination, preferences)
    }
}

/// Coarse estimate reported under the first requested mode
fn fallback_travel(destination: &Destination, preferences: &Preferences) -> TravelResult {
    TravelResult {
        distance_km: 0.0,
        duration_hours: estimate_simple_travel(destination.coordinates, &preferences.current_location),
        mode: preferences
            .transport_modes
            .first()
            .cloned()
            .unwrap_or(TransportMode::Flight),
    }
}

/// Cost-of-living page for the destination's town
pub fn numbeo_url(destination: &Destination) -> String {
    format!(
        "{}/{}-{}",
        NUMBEO_BASE_URL,
        urlencoding::encode(&destination.name),
        urlencoding::encode(&destination.country)
    )
}
