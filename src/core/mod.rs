// Core algorithm exports
pub mod distance;
pub mod explanation;
pub mod filters;
pub mod geocoder;
pub mod ranker;
pub mod scoring;
pub mod travel;
pub mod weights;

pub use distance::haversine_distance;
pub use explanation::ExplanationEngine;
pub use filters::{has_positive_score, within_travel_budget};
pub use geocoder::Geocoder;
pub use ranker::{numbeo_url, parse_preferences, unranked, Ranker, RankingError};
pub use scoring::calculate_score;
pub use travel::{
    estimate_simple_travel, estimate_travel_time, select_fastest, TravelError, TravelTimeProvider,
};
pub use weights::{apply_weight_change, normalize_weights};
