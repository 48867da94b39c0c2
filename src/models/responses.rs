use serde::{Deserialize, Serialize};
use crate::models::domain::RankedDestination;

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub destinations: Vec<RankedDestination>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    /// False when ranking failed and the unranked catalog was returned
    pub ranked: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub destinations: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
