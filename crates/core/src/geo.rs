//! Great-circle distance for the "nearby events" sort.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two WGS84 coordinates.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_for_identical_points() {
        assert_eq!(haversine_km(52.37, 4.89, 52.37, 4.89), 0.0);
    }

    #[test]
    fn amsterdam_to_paris_is_roughly_430_km() {
        let d = haversine_km(52.3676, 4.9041, 48.8566, 2.3522);
        assert!((d - 430.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let ab = haversine_km(1.0, 2.0, 3.0, 4.0);
        let ba = haversine_km(3.0, 4.0, 1.0, 2.0);
        assert!((ab - ba).abs() < 1e-9);
    }
}
