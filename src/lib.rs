//! Find A Wave - surf-trip destination ranking service
//!
//! This library ranks surf destinations for a traveller: it estimates travel
//! time from a free-text origin, drops destinations outside the travel budget,
//! scores the rest and explains each recommendation.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_score, haversine_distance, ExplanationEngine, Ranker, RankingError};
pub use models::{Destination, Explanation, Preferences, PreferenceWeights, RankedDestination};
pub use services::{DestinationCatalog, TravelTimeService};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let catalog = DestinationCatalog::embedded().unwrap();
        let first = &catalog.all()[0];
        assert_eq!(haversine_distance(first.coordinates, first.coordinates), 0.0);
    }
}
