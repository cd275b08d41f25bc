//! Great-circle distance.

use crate::domain::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometres.
///
/// The intermediate term is clamped to `[0, 1]` before the square root:
/// floating-point rounding can push it fractionally outside that range for
/// near-zero and near-antipodal separations, and `asin` would otherwise
/// return NaN.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let dlat = (to.latitude() - from.latitude()).to_radians();
    let dlon = (to.longitude() - from.longitude()).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_coordinate() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0)
            .prop_map(|(lat, lon)| Coordinate::new(lat, lon).unwrap())
    }

    proptest! {
        /// distance(A, B) == distance(B, A).
        #[test]
        fn symmetric(a in any_coordinate(), b in any_coordinate()) {
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            prop_assert!((ab - ba).abs() < 1e-9, "ab={ab} ba={ba}");
        }

        /// distance(P, P) == 0.
        #[test]
        fn zero_for_same_point(p in any_coordinate()) {
            prop_assert_eq!(haversine_km(p, p), 0.0);
        }

        /// Distances are finite, non-negative, and bounded by half the
        /// Earth's circumference.
        #[test]
        fn bounded(a in any_coordinate(), b in any_coordinate()) {
            let d = haversine_km(a, b);
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}
