//! Great-circle distance.

/// Mean Earth radius used by [`haversine_distance`], in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two points given in degrees.
///
/// Non-finite inputs are not rejected; a `NaN` coordinate yields `NaN`.
#[must_use]
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        assert!(haversine_distance(28.5355, 77.3910, 28.5355, 77.3910).abs() < f64::EPSILON);
        assert!(haversine_distance(-45.0, -170.0, -45.0, -170.0).abs() < f64::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = haversine_distance(28.5355, 77.3910, 19.0760, 72.8777);
        let ba = haversine_distance(19.0760, 72.8777, 28.5355, 77.3910);
        assert!((ab - ba).abs() < 1e-9, "{ab} != {ba}");
    }

    #[test]
    fn nearby_points_are_about_a_tenth_of_a_km_apart() {
        let d = haversine_distance(28.5355, 77.3910, 28.5360, 77.3920);
        assert!(d > 0.10 && d < 0.13, "got {d}");
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let d = haversine_distance(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn nan_propagates() {
        assert!(haversine_distance(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }
}
