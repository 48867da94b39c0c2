use crate::models::Coordinates;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine great-circle distance between two points in kilometers
///
/// Symmetric in its arguments and zero for identical points.
#[inline]
pub fn haversine_distance(from: Coordinates, to: Coordinates) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: Coordinates = Coordinates::new(51.5074, -0.1278);
    const PARIS: Coordinates = Coordinates::new(48.8566, 2.3522);

    #[test]
    fn test_haversine_distance() {
        // London to Paris is approximately 344 km
        let distance = haversine_distance(LONDON, PARIS);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_haversine_symmetric() {
        let there = haversine_distance(LONDON, PARIS);
        let back = haversine_distance(PARIS, LONDON);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_same_point() {
        assert_eq!(haversine_distance(LONDON, LONDON), 0.0);
    }

    #[test]
    fn test_haversine_antipodal() {
        // Half the circumference: pi * R
        let distance = haversine_distance(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 180.0));
        assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1.0);
    }
}
