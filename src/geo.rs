//! Great-circle distance utilities
//!
//! Thin wrapper around the `haversine` crate working on plain
//! (latitude, longitude) degree pairs, so callers never touch the
//! crate's own location type.

use haversine::{distance, Location as HaversineLocation, Units};

/// Great-circle distance in kilometers between two (latitude, longitude)
/// points. Symmetric, and zero for identical points.
#[must_use]
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let from_haversine = HaversineLocation {
        latitude: from.0,
        longitude: from.1,
    };
    let to_haversine = HaversineLocation {
        latitude: to.0,
        longitude: to.1,
    };
    distance(from_haversine, to_haversine, Units::Kilometers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELHI: (f64, f64) = (28.6139, 77.2090);
    const MUMBAI: (f64, f64) = (19.0760, 72.8777);

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(haversine_km(DELHI, DELHI), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = haversine_km(DELHI, MUMBAI);
        let back = haversine_km(MUMBAI, DELHI);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_delhi_mumbai_regression_bound() {
        let distance = haversine_km(DELHI, MUMBAI);
        assert!(
            (1150.0..=1180.0).contains(&distance),
            "expected ~1150-1180 km, got {distance}"
        );
    }
}
