use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Destination, PreferenceWeights, Preferences, WeightFactor};

/// Request to rank destinations
///
/// Preferences stay raw JSON until the handler decodes them, so that
/// malformed input falls back to the unranked list instead of a 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankRequest {
    pub preferences: serde_json::Value,
    /// Rank these instead of the loaded catalog
    #[serde(default)]
    pub destinations: Option<Vec<Destination>>,
    #[serde(default, rename = "includeExplanations")]
    pub include_explanations: bool,
}

/// Request to explain a single destination
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExplainRequest {
    #[validate(nested)]
    pub preferences: Preferences,
    #[serde(default)]
    pub weights: Option<PreferenceWeights>,
}

/// Request to normalize weights, optionally after a single slider edit
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_weight_edit"))]
pub struct NormalizeWeightsRequest {
    pub weights: PreferenceWeights,
    #[serde(default)]
    pub factor: Option<WeightFactor>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub value: Option<f64>,
}

fn validate_weight_edit(req: &NormalizeWeightsRequest) -> Result<(), validator::ValidationError> {
    if req.factor.is_some() != req.value.is_some() {
        return Err(validator::ValidationError::new("factor_and_value_required_together"));
    }
    if WeightFactor::ALL
        .iter()
        .any(|f| req.weights.get(*f) < 0.0)
    {
        return Err(validator::ValidationError::new("negative_weight"));
    }
    Ok(())
}

/// Query parameters for the seasonal conditions endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SeasonalQuery {
    #[validate(range(min = 1, max = 12))]
    pub month: u8,
}
