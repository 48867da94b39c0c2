use crate::core::filters::{has_surf_school, is_adjacent_to_best_month, is_best_month};
use crate::models::{Destination, Preferences, TransportMode};

/// Upper bound of the recommendation score
pub const MAX_SCORE: f64 = 100.0;

/// Calculate the recommendation score (at most 100) for a destination
///
/// Scoring formula (sum of independent components):
/// score = (
///     ability_match       # 20 / 15 / 5 / 0 by difficulty gap
///   + budget_fit          # ~15, can exceed 15 for very cheap spots
///   + seasonality         # 15 peak, 10 adjacent month
///   + transport           # 10, or 5 with no modes selected
///   + surf_lessons        # 10 when not needed, 15 / 0 when needed
///   + temperature_fit     # 15 in band, decaying with distance
///   + wave_quality * 2    # up to 20
/// )
///
/// Components are not capped individually; only the total is.
pub fn calculate_score(destination: &Destination, preferences: &Preferences) -> f64 {
    let total = score_surfing_ability(destination.difficulty_level, preferences.surfing_ability)
        + score_budget(destination.cost, preferences.budget)
        + score_seasonality(&destination.best_months, preferences.travel_month())
        + score_transport(&preferences.transport_modes)
        + score_surf_lessons(destination, preferences.needs_surf_lessons)
        + score_temperature(destination.average_temp, preferences.temperature_range)
        + score_wave_quality(destination.wave_quality);

    total.min(MAX_SCORE)
}

/// Ability match (max 20)
#[inline]
pub fn score_surfing_ability(destination_level: u8, preferred_level: u8) -> f64 {
    match (i16::from(destination_level) - i16::from(preferred_level)).abs() {
        0 => 20.0,
        1 => 15.0,
        2 => 5.0,
        _ => 0.0,
    }
}

/// Budget fit (nominally max 15)
#[inline]
pub fn score_budget(destination_cost: f64, budget: f64) -> f64 {
    if destination_cost <= budget {
        let ratio = destination_cost / budget;
        return 15.0 * (1.0 - ratio + 0.2);
    }

    let overage = (destination_cost - budget) / budget;
    if overage <= 0.2 {
        10.0
    } else if overage <= 0.5 {
        5.0
    } else {
        0.0
    }
}

/// Seasonality (max 15)
#[inline]
pub fn score_seasonality(best_months: &[u8], travel_month: u8) -> f64 {
    if is_best_month(best_months, travel_month) {
        15.0
    } else if is_adjacent_to_best_month(best_months, travel_month) {
        10.0
    } else {
        0.0
    }
}

/// Transport availability (max 10)
#[inline]
pub fn score_transport(transport_modes: &[TransportMode]) -> f64 {
    if transport_modes.is_empty() { 5.0 } else { 10.0 }
}

/// Surf-lesson fit: flat 10 when lessons are not needed
#[inline]
pub fn score_surf_lessons(destination: &Destination, needs_lessons: bool) -> f64 {
    if !needs_lessons {
        return 10.0;
    }
    if has_surf_school(destination) { 15.0 } else { 0.0 }
}

/// Preferred air temperature band (°C) for a 1-4 temperature preference
#[inline]
pub fn temperature_band(temperature_range: u8) -> (f64, f64) {
    match temperature_range {
        1 => (5.0, 15.0),
        3 => (22.0, 28.0),
        4 => (28.0, 40.0),
        _ => (15.0, 22.0),
    }
}

/// Temperature fit (max 15)
pub fn score_temperature(destination_temp: f64, temperature_range: u8) -> f64 {
    let (preferred_min, preferred_max) = temperature_band(temperature_range);

    if destination_temp >= preferred_min && destination_temp <= preferred_max {
        return 15.0;
    }

    let distance_from_range = if destination_temp < preferred_min {
        preferred_min - destination_temp
    } else {
        destination_temp - preferred_max
    };

    if distance_from_range <= 3.0 {
        10.0
    } else if distance_from_range <= 6.0 {
        5.0
    } else if distance_from_range <= 10.0 {
        2.0
    } else {
        0.0
    }
}

/// Wave-quality bonus (max 20)
#[inline]
pub fn score_wave_quality(wave_quality: u8) -> f64 {
    f64::from(wave_quality) * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, Currency, TravelDates, WaveSize};
    use chrono::NaiveDate;

    fn create_test_destination() -> Destination {
        Destination {
            id: "test-spot".to_string(),
            name: "Test Spot".to_string(),
            country: "Portugal".to_string(),
            region: "Europe".to_string(),
            coordinates: Coordinates::new(38.97, -9.42),
            wave_quality: 8,
            wave_size: WaveSize::Medium,
            difficulty_level: 2,
            best_months: vec![6, 7, 8],
            average_temp: 18.0,
            water_temp: 17.0,
            crowd_level: 6,
            cost: 50.0,
            accommodation_options: vec!["Hostel".to_string()],
            image_url: String::new(),
            description: String::new(),
            highlights: vec![],
            weather_conditions: String::new(),
            surfline_spot_id: None,
            forecast: None,
            tourist_friendliness: None,
            lifeguard_presence: None,
            break_type: None,
            reddit_quotes: vec![],
            safety_info: None,
            skill_requirements: vec![],
            booking_options: vec![],
        }
    }

    fn create_test_preferences() -> Preferences {
        Preferences {
            surfing_ability: 2,
            current_location: "London".to_string(),
            transport_modes: vec![TransportMode::Flight],
            max_travel_time: 10.0,
            budget: 60.0,
            currency: Currency::Usd,
            temperature_range: 2,
            travel_dates: TravelDates::new(
                NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                Some(NaiveDate::from_ymd_opt(2025, 7, 7).unwrap()),
            ),
            needs_surf_lessons: false,
            preference_weights: None,
        }
    }

    #[test]
    fn test_reference_scenario_sums_components() {
        // 20 + 15 * (1 - 50/60 + 0.2) + 15 + 10 + 10 + 15 + 16 = 91.5
        let destination = create_test_destination();
        let preferences = create_test_preferences();

        let score = calculate_score(&destination, &preferences);
        assert!((score - 91.5).abs() < 1e-9, "got {}", score);
    }

    #[test]
    fn test_cheap_destination_clamps_to_100() {
        // Budget component 16.75 pushes the raw sum to 102.75
        let mut destination = create_test_destination();
        destination.cost = 5.0;
        let preferences = create_test_preferences();

        assert_eq!(calculate_score(&destination, &preferences), MAX_SCORE);
    }

    #[test]
    fn test_budget_component_in_scenario() {
        let budget = score_budget(50.0, 60.0);
        assert!((budget - 5.5).abs() < 1e-9, "got {}", budget);
    }

    #[test]
    fn test_ability_match_steps() {
        assert_eq!(score_surfing_ability(2, 2), 20.0);
        assert_eq!(score_surfing_ability(3, 2), 15.0);
        assert_eq!(score_surfing_ability(1, 2), 15.0);
        assert_eq!(score_surfing_ability(4, 2), 5.0);
        assert_eq!(score_surfing_ability(4, 1), 0.0);
    }

    #[test]
    fn test_budget_can_exceed_nominal_ceiling() {
        // cost/budget < 0.2 pushes the component past 15
        assert!(score_budget(10.0, 100.0) > 15.0);
        assert!((score_budget(100.0, 100.0) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_budget_overage_steps() {
        assert_eq!(score_budget(120.0, 100.0), 10.0);
        assert_eq!(score_budget(150.0, 100.0), 5.0);
        assert_eq!(score_budget(151.0, 100.0), 0.0);
    }

    #[test]
    fn test_seasonality() {
        assert_eq!(score_seasonality(&[6, 7, 8], 7), 15.0);
        assert_eq!(score_seasonality(&[6, 7, 8], 9), 10.0);
        assert_eq!(score_seasonality(&[12], 1), 10.0);
        assert_eq!(score_seasonality(&[6, 7, 8], 12), 0.0);
    }

    #[test]
    fn test_transport_score() {
        assert_eq!(score_transport(&[]), 5.0);
        assert_eq!(score_transport(&[TransportMode::Car, TransportMode::Bus]), 10.0);
    }

    #[test]
    fn test_surf_lessons() {
        let mut destination = create_test_destination();
        assert_eq!(score_surf_lessons(&destination, false), 10.0);
        assert_eq!(score_surf_lessons(&destination, true), 0.0);

        destination.accommodation_options.push("Beachfront Surf-School Lodge".to_string());
        assert_eq!(score_surf_lessons(&destination, true), 15.0);
    }

    #[test]
    fn test_temperature_fit() {
        assert_eq!(score_temperature(18.0, 2), 15.0);
        assert_eq!(score_temperature(22.0, 2), 15.0);
        assert_eq!(score_temperature(25.0, 2), 10.0);
        assert_eq!(score_temperature(9.0, 2), 5.0);
        assert_eq!(score_temperature(30.0, 2), 2.0);
        assert_eq!(score_temperature(33.0, 2), 0.0);
        assert_eq!(score_temperature(35.0, 4), 15.0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let destination = create_test_destination();
        let mut preferences = create_test_preferences();
        preferences.budget = 40.0;

        let first = calculate_score(&destination, &preferences);
        let second = calculate_score(&destination, &preferences);
        assert_eq!(first, second);
        assert!(first <= MAX_SCORE);
    }
}
