// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Mean radius of Earth, in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Calculates the great-circle distance between two lat-lon positions
/// on Earth using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
/// Returns the result in meters.
///
/// Swapping the two positions gives a bit-identical result.
pub fn earth_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let sin_dphi_half = ((lat2 - lat1).to_radians() * 0.5).sin();
    let sin_dlambda_half = ((lon2 - lon1).to_radians() * 0.5).sin();

    // Squares are sign-agnostic, and the cosine product is commutative,
    // so `a` doesn't depend on the argument order.
    let a = sin_dphi_half * sin_dphi_half
        + phi1.cos() * phi2.cos() * sin_dlambda_half * sin_dlambda_half;
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_almost_eq {
        ($a:expr, $b:expr, $eps:expr) => {{
            let (a, b): (f64, f64) = ($a, $b);
            assert!((a - b).abs() < $eps, "assertion failed: {} ≈ {}", a, b)
        }};
    }

    #[test]
    fn zero_for_identical_points() {
        assert_eq!(earth_distance(21.103063, 79.004020, 21.103063, 79.004020), 0.0);
        assert_eq!(earth_distance(-33.0, -70.5, -33.0, -70.5), 0.0);
    }

    #[test]
    fn symmetric() {
        let ab = earth_distance(21.103063, 79.004020, 21.101417, 79.007840);
        let ba = earth_distance(21.101417, 79.007840, 21.103063, 79.004020);
        assert_eq!(ab, ba);
    }

    #[test]
    fn one_degree_of_latitude() {
        // R * pi / 180
        assert_almost_eq!(earth_distance(0.0, 0.0, 1.0, 0.0), 111_194.93, 0.01);
        assert_almost_eq!(earth_distance(52.0, 21.0, 53.0, 21.0), 111_194.93, 0.01);
    }

    #[test]
    fn antipodes() {
        let d = earth_distance(0.0, 0.0, 0.0, 180.0);
        assert_almost_eq!(d, EARTH_RADIUS * std::f64::consts::PI, 1e-6);
        assert!(d.is_finite());
    }

    #[test]
    fn campus_scale() {
        // PCE Main Gate -> First Year Canteen
        let d = earth_distance(21.103063, 79.004020, 21.103954, 79.005062);
        assert_almost_eq!(d, 146.63, 0.01);
    }
}
