use crate::core::travel::TravelError;
use crate::models::Coordinates;

/// Approximate city-center coordinates, in lookup order
const CITY_COORDINATES: &[(&str, Coordinates)] = &[
    ("london", Coordinates::new(51.5074, -0.1278)),
    ("new york", Coordinates::new(40.7128, -74.0060)),
    ("los angeles", Coordinates::new(34.0522, -118.2437)),
    ("paris", Coordinates::new(48.8566, 2.3522)),
    ("tokyo", Coordinates::new(35.6762, 139.6503)),
    ("sydney", Coordinates::new(-33.8688, 151.2093)),
    ("san francisco", Coordinates::new(37.7749, -122.4194)),
    ("amsterdam", Coordinates::new(52.3676, 4.9041)),
    ("barcelona", Coordinates::new(41.3851, 2.1734)),
    ("lisbon", Coordinates::new(38.7223, -9.1393)),
    ("dublin", Coordinates::new(53.3498, -6.2603)),
    ("berlin", Coordinates::new(52.5200, 13.4050)),
    ("madrid", Coordinates::new(40.4168, -3.7038)),
    ("rome", Coordinates::new(41.9028, 12.4964)),
    ("copenhagen", Coordinates::new(55.6761, 12.5683)),
    ("stockholm", Coordinates::new(59.3293, 18.0686)),
    ("toronto", Coordinates::new(43.6532, -79.3832)),
    ("vancouver", Coordinates::new(49.2827, -123.1207)),
    ("miami", Coordinates::new(25.7617, -80.1918)),
    ("honolulu", Coordinates::new(21.3099, -157.8581)),
    ("rio de janeiro", Coordinates::new(-22.9068, -43.1729)),
    ("buenos aires", Coordinates::new(-34.6037, -58.3816)),
    ("cape town", Coordinates::new(-33.9249, 18.4241)),
    ("mumbai", Coordinates::new(19.0760, 72.8777)),
    ("singapore", Coordinates::new(1.3521, 103.8198)),
    ("bangkok", Coordinates::new(13.7563, 100.5018)),
    ("bali", Coordinates::new(-8.3405, 115.0920)),
    ("mexico city", Coordinates::new(19.4326, -99.1332)),
    ("lima", Coordinates::new(-12.0464, -77.0428)),
];

/// Table-driven geocoder for free-text locations
///
/// Lookup is exact on the trimmed, lowercased input, then substring
/// containment in either direction. The first table entry that matches wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Geocoder;

impl Geocoder {
    pub fn new() -> Self {
        Self
    }

    pub fn geocode(&self, location: &str) -> Result<Coordinates, TravelError> {
        let normalized = location.trim().to_lowercase();

        // Every city name contains the empty string
        if normalized.is_empty() {
            return Err(TravelError::GeocodeNotFound(location.to_string()));
        }

        if let Some((_, coords)) = CITY_COORDINATES.iter().find(|(city, _)| *city == normalized) {
            return Ok(*coords);
        }

        CITY_COORDINATES
            .iter()
            .find(|(city, _)| city.contains(normalized.as_str()) || normalized.contains(city))
            .map(|(_, coords)| *coords)
            .ok_or_else(|| TravelError::GeocodeNotFound(location.to_string()))
    }

    /// Known city names, in lookup order
    pub fn known_locations(&self) -> impl Iterator<Item = &'static str> {
        CITY_COORDINATES.iter().map(|(city, _)| *city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_case_and_space_insensitive() {
        let geocoder = Geocoder::new();
        let coords = geocoder.geocode("  LoNdOn ").unwrap();
        assert_eq!(coords, Coordinates::new(51.5074, -0.1278));
    }

    #[test]
    fn test_input_containing_city_matches() {
        let geocoder = Geocoder::new();
        let coords = geocoder.geocode("Lisbon, Portugal").unwrap();
        assert_eq!(coords, Coordinates::new(38.7223, -9.1393));
    }

    #[test]
    fn test_partial_city_name_matches() {
        let geocoder = Geocoder::new();
        let coords = geocoder.geocode("francisco").unwrap();
        assert_eq!(coords, Coordinates::new(37.7749, -122.4194));
    }

    #[test]
    fn test_first_entry_wins_on_ambiguous_substring() {
        // "an" is contained in "los angeles" before "san francisco"
        let geocoder = Geocoder::new();
        let coords = geocoder.geocode("an").unwrap();
        assert_eq!(coords, Coordinates::new(34.0522, -118.2437));
    }

    #[test]
    fn test_typo_is_not_found() {
        let geocoder = Geocoder::new();
        assert!(matches!(
            geocoder.geocode("Lonodn"),
            Err(TravelError::GeocodeNotFound(ref text)) if text == "Lonodn"
        ));
    }

    #[test]
    fn test_empty_input_is_not_found() {
        let geocoder = Geocoder::new();
        assert!(geocoder.geocode("   ").is_err());
    }

    #[test]
    fn test_known_locations_order() {
        let geocoder = Geocoder::new();
        let first: Vec<_> = geocoder.known_locations().take(2).collect();
        assert_eq!(first, vec!["london", "new york"]);
    }
}
