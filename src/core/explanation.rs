//! Human-readable recommendation breakdowns.
//!
//! The overall score here is computed from its own factor model and is only
//! shown to users. Ordering always uses [`crate::core::scoring::calculate_score`].

use crate::core::filters::{is_adjacent_to_best_month, is_best_month};
use crate::models::{
    Destination, Explanation, FactorBreakdown, FactorScore, PreferenceWeights, Preferences,
};

/// Factor scores below this are reported as what held the score back
const WEAK_FACTOR_THRESHOLD: f64 = 70.0;

/// Builds [`Explanation`]s from a destination and the user's preferences
#[derive(Debug, Clone, Copy)]
pub struct ExplanationEngine {
    default_weights: PreferenceWeights,
}

impl ExplanationEngine {
    pub fn new(default_weights: PreferenceWeights) -> Self {
        Self { default_weights }
    }

    pub fn default_weights(&self) -> &PreferenceWeights {
        &self.default_weights
    }

    /// Explain how well a destination fits the preferences
    ///
    /// Weights come from `custom_weights`, then the preferences, then the
    /// engine defaults.
    pub fn generate_explanation(
        &self,
        destination: &Destination,
        preferences: &Preferences,
        custom_weights: Option<&PreferenceWeights>,
    ) -> Explanation {
        let weights = custom_weights
            .or(preferences.preference_weights.as_ref())
            .unwrap_or(&self.default_weights);

        let factor_breakdown = FactorBreakdown {
            skill_match: skill_match(destination, preferences),
            budget_fit: budget_fit(destination, preferences),
            seasonal_timing: seasonal_timing(destination, preferences),
            travel_logistics: travel_logistics(destination),
            safety_factors: safety_factors(destination, preferences),
            personal_preferences: personal_preferences(destination, preferences),
        };

        Explanation {
            overall_score: overall_score(&factor_breakdown, weights),
            confidence_level: confidence_level(destination, &factor_breakdown),
            alternative_reasons: alternative_reasons(&factor_breakdown),
            why_not_higher: why_not_higher(&factor_breakdown),
            factor_breakdown,
        }
    }
}

impl Default for ExplanationEngine {
    fn default() -> Self {
        Self::new(PreferenceWeights::default())
    }
}

fn skill_level_name(level: u8) -> &'static str {
    match level {
        1 => "beginner",
        2 => "intermediate",
        3 => "advanced",
        4 => "expert",
        _ => "unknown",
    }
}

fn month_name(month: u8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "unknown",
    }
}

fn is_beginner_support(preferences: &Preferences) -> bool {
    preferences.surfing_ability <= 2
}

fn skill_match(destination: &Destination, preferences: &Preferences) -> FactorScore {
    let user_skill = preferences.surfing_ability;
    let difficulty = destination.difficulty_level;
    let gap = (i16::from(user_skill) - i16::from(difficulty)).abs();
    let mut confidence = 90.0;

    let (mut score, mut explanation): (f64, String) = if gap == 0 {
        (100.0, format!("Perfect match for your {} level", skill_level_name(user_skill)))
    } else if gap == 1 {
        let text = if user_skill > difficulty {
            "Slightly easier than your skill level - great for building confidence"
        } else {
            "Slightly more challenging - good for progression"
        };
        (75.0, text.to_string())
    } else if user_skill < difficulty {
        confidence = 95.0;
        (30.0, format!("May be too challenging for {} level", skill_level_name(user_skill)))
    } else {
        (60.0, "Easier than your skill level but still enjoyable".to_string())
    };

    let very_safe = destination
        .safety_info
        .as_ref()
        .is_some_and(|info| info.overall_safety_rating >= 8);
    if user_skill == 1 && very_safe {
        score += 10.0;
        explanation.push_str(" (bonus for excellent safety rating)");
    }

    FactorScore {
        score: score.min(100.0),
        weight: 15.0,
        explanation,
        confidence,
    }
}

fn budget_fit(destination: &Destination, preferences: &Preferences) -> FactorScore {
    let daily_cost = destination.cost;
    let daily_budget = preferences.budget / preferences.trip_duration() as f64;
    // Half-dollar amounts round up
    let shown_budget = daily_budget.round();

    let (score, explanation) = if daily_cost <= daily_budget * 0.8 {
        (100.0, format!("Well within budget (${} vs ${} daily)", daily_cost, shown_budget))
    } else if daily_cost <= daily_budget {
        (80.0, format!("Fits your budget (${} daily)", daily_cost))
    } else if daily_cost <= daily_budget * 1.2 {
        (60.0, format!("Slightly over budget (${} vs ${} daily)", daily_cost, shown_budget))
    } else {
        (30.0, format!("Above your budget range (${} vs ${} daily)", daily_cost, shown_budget))
    };

    FactorScore {
        score,
        weight: 20.0,
        explanation,
        confidence: 85.0,
    }
}

fn seasonal_timing(destination: &Destination, preferences: &Preferences) -> FactorScore {
    let month = preferences.travel_month();

    let (score, explanation, confidence) = if is_best_month(&destination.best_months, month) {
        (100.0, format!("Excellent timing - {} is peak season", month_name(month)), 90.0)
    } else if is_adjacent_to_best_month(&destination.best_months, month) {
        (70.0, "Good timing - close to peak season".to_string(), 75.0)
    } else {
        (40.0, "Off-season timing - waves may be smaller/less consistent".to_string(), 60.0)
    };

    FactorScore {
        score,
        weight: 25.0,
        explanation,
        confidence,
    }
}

// Real travel time is not consulted here
fn travel_logistics(destination: &Destination) -> FactorScore {
    if destination.tourist_friendliness.is_some_and(|t| t >= 8) {
        return FactorScore {
            score: 85.0,
            weight: 15.0,
            explanation: "Excellent tourist infrastructure makes travel easy".to_string(),
            confidence: 80.0,
        };
    }

    FactorScore {
        score: 70.0,
        weight: 15.0,
        explanation: "Travel logistics look manageable".to_string(),
        confidence: 50.0,
    }
}

fn safety_factors(destination: &Destination, preferences: &Preferences) -> FactorScore {
    let weight = if is_beginner_support(preferences) { 10.0 } else { 5.0 };

    let Some(info) = destination.safety_info.as_ref() else {
        return FactorScore {
            score: 50.0,
            weight,
            explanation: "Limited safety information available".to_string(),
            confidence: 30.0,
        };
    };

    let rating = info.overall_safety_rating;
    let mut score = f64::from(rating) * 10.0;
    let mut explanation = format!("Safety rating: {}/10", rating);

    if is_beginner_support(preferences) && rating >= 8 {
        score += 10.0;
        explanation.push_str(" (excellent for beginners)");
    }
    if info.lifeguard_presence {
        explanation.push_str(", lifeguards present");
    }

    FactorScore {
        score: score.min(100.0),
        weight,
        explanation,
        confidence: 95.0,
    }
}

/// Half-open temperature bands used for display
fn matches_temperature_preference(temperature_range: u8, temp: f64) -> bool {
    match temperature_range {
        1 => temp < 15.0,
        2 => (15.0..20.0).contains(&temp),
        3 => (20.0..25.0).contains(&temp),
        4 => temp >= 25.0,
        _ => false,
    }
}

fn personal_preferences(destination: &Destination, preferences: &Preferences) -> FactorScore {
    let mut score = 70.0;
    let mut explanation = "Matches your general preferences".to_string();

    if matches_temperature_preference(preferences.temperature_range, destination.average_temp) {
        score += 15.0;
        explanation = "Perfect temperature match for your preferences".to_string();
    }

    if destination.crowd_level <= 5 {
        score += 10.0;
        explanation.push_str(", uncrowded spot");
    }

    FactorScore {
        score: f64::min(score, 100.0),
        weight: 10.0,
        explanation,
        confidence: 70.0,
    }
}

/// Weighted mean of factor scores
///
/// Seasonal timing is weighted by the wave-quality slot, and personal
/// preferences by temperature plus crowd level.
fn overall_score(breakdown: &FactorBreakdown, weights: &PreferenceWeights) -> f64 {
    let total_weight = weights.total();
    if total_weight <= 0.0 {
        return 0.0;
    }

    let weighted_sum = breakdown.skill_match.score * weights.skill_match
        + breakdown.budget_fit.score * weights.budget
        + breakdown.seasonal_timing.score * weights.wave_quality
        + breakdown.travel_logistics.score * weights.travel_time
        + breakdown.safety_factors.score * weights.safety_factors
        + breakdown.personal_preferences.score * (weights.temperature + weights.crowd_level);

    (weighted_sum / total_weight).round()
}

fn confidence_level(destination: &Destination, breakdown: &FactorBreakdown) -> f64 {
    let entries = breakdown.entries();
    let mut confidence =
        entries.iter().map(|(_, f)| f.confidence).sum::<f64>() / entries.len() as f64;

    if destination.reddit_quotes.is_empty() {
        confidence -= 10.0;
    }
    if destination.forecast.is_none() {
        confidence -= 5.0;
    }

    confidence.max(0.0).round()
}

/// "skillMatch" -> "skill match"
fn humanize_factor(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Factors ordered by score, highest first; ties keep declaration order
fn ranked_factors(breakdown: &FactorBreakdown) -> Vec<(&'static str, &FactorScore)> {
    let mut factors = breakdown.entries().to_vec();
    factors.sort_by(|(_, a), (_, b)| {
        b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal)
    });
    factors
}

fn alternative_reasons(breakdown: &FactorBreakdown) -> Vec<String> {
    ranked_factors(breakdown)
        .into_iter()
        .take(2)
        .zip(["Strong", "Good"])
        .map(|((name, factor), label)| {
            format!("{} {}: {}", label, humanize_factor(name), factor.explanation)
        })
        .collect()
}

fn why_not_higher(breakdown: &FactorBreakdown) -> Option<String> {
    let mut factors = breakdown.entries().to_vec();
    factors.sort_by(|(_, a), (_, b)| {
        a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal)
    });

    factors
        .first()
        .filter(|(_, weakest)| weakest.score < WEAK_FACTOR_THRESHOLD)
        .map(|(name, weakest)| {
            format!("Score limited by {}: {}", humanize_factor(name), weakest.explanation)
        })
}
