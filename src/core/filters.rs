use crate::models::{Destination, Preferences, TravelResult};

/// Hard travel-time filter used by the ranking pipeline
#[inline]
pub fn within_travel_budget(travel: &TravelResult, preferences: &Preferences) -> bool {
    travel.duration_hours <= preferences.max_travel_time
}

/// Safety net applied after scoring; scores at or below zero are dropped
#[inline]
pub fn has_positive_score(score: f64) -> bool {
    score > 0.0
}

#[inline]
pub fn previous_month(month: u8) -> u8 {
    if month <= 1 { 12 } else { month - 1 }
}

#[inline]
pub fn next_month(month: u8) -> u8 {
    if month >= 12 { 1 } else { month + 1 }
}

/// Month is one of the destination's peak months
#[inline]
pub fn is_best_month(best_months: &[u8], month: u8) -> bool {
    best_months.contains(&month)
}

/// Month sits next to a peak month, wrapping around the year end
pub fn is_adjacent_to_best_month(best_months: &[u8], month: u8) -> bool {
    let neighbours = [previous_month(month), next_month(month)];
    best_months.iter().any(|m| neighbours.contains(m))
}

/// Any accommodation option advertises a surf school
pub fn has_surf_school(destination: &Destination) -> bool {
    destination.accommodation_options.iter().any(|option| {
        let option = option.to_lowercase();
        option.contains("surf school") || option.contains("surf-school")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_wrapping() {
        assert_eq!(previous_month(1), 12);
        assert_eq!(next_month(12), 1);
        assert_eq!(previous_month(7), 6);
        assert_eq!(next_month(7), 8);
    }

    #[test]
    fn test_best_and_adjacent_months() {
        let best = [6, 7, 8];
        assert!(is_best_month(&best, 7));
        assert!(!is_best_month(&best, 9));
        assert!(is_adjacent_to_best_month(&best, 9));
        assert!(is_adjacent_to_best_month(&best, 5));
        assert!(!is_adjacent_to_best_month(&best, 11));
    }

    #[test]
    fn test_adjacent_across_year_end() {
        assert!(is_adjacent_to_best_month(&[12], 1));
        assert!(is_adjacent_to_best_month(&[1], 12));
        assert!(!is_adjacent_to_best_month(&[], 1));
    }

    #[test]
    fn test_positive_score_filter() {
        assert!(has_positive_score(0.1));
        assert!(!has_positive_score(0.0));
        assert!(!has_positive_score(-3.0));
    }
}
