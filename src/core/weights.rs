use crate::models::{PreferenceWeights, WeightFactor};

/// Rescale weights so they sum to 100, keeping their proportions
///
/// Each weight is rounded on its own, so the result may be off 100 by up to
/// one point per factor. An all-zero set has no proportions to keep and is
/// returned unchanged.
pub fn normalize_weights(weights: &PreferenceWeights) -> PreferenceWeights {
    let total = weights.total();
    if total <= 0.0 || !total.is_finite() {
        return *weights;
    }

    let factor = 100.0 / total;
    let mut normalized = *weights;
    for key in WeightFactor::ALL {
        normalized.set(key, (weights.get(key) * factor).round());
    }
    normalized
}

/// Apply a single slider edit and renormalize the whole set
///
/// The other factors shift proportionally to make room for the new value.
pub fn apply_weight_change(
    weights: &PreferenceWeights,
    factor: WeightFactor,
    value: f64,
) -> PreferenceWeights {
    let mut updated = *weights;
    updated.set(factor, value.max(0.0));
    normalize_weights(&updated)
}
