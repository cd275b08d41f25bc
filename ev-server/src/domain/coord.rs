//! Geographic coordinate type.

use std::fmt;

/// Error returned when constructing an invalid coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

/// A validated WGS84 coordinate in decimal degrees.
///
/// Latitude is in `[-90, 90]`, longitude in `[-180, 180]`, and both are
/// finite. Code that receives a `Coordinate` can rely on those bounds;
/// unvalidated source data is rejected at construction.
///
/// # Examples
///
/// ```
/// use ev_server::domain::Coordinate;
///
/// let city_hall = Coordinate::new(37.5665, 126.9780).unwrap();
/// assert_eq!(city_hall.latitude(), 37.5665);
///
/// // Non-finite values are rejected
/// assert!(Coordinate::new(f64::NAN, 0.0).is_err());
///
/// // Out-of-range values are rejected
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Construct a coordinate from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(InvalidCoordinate {
                reason: "latitude and longitude must be finite",
            });
        }

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinate {
                reason: "latitude must be in [-90, 90] degrees",
            });
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinate {
                reason: "longitude must be in [-180, 180] degrees",
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Whether both components are exactly zero.
    ///
    /// The KEPCO API uses `(0, 0)` as a "coordinate unavailable" sentinel,
    /// so API-sourced records at the zero-zero point are dropped at ingestion.
    pub fn is_zero_zero(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-range pair is accepted and round-trips through accessors.
        #[test]
        fn in_range_always_valid(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let c = Coordinate::new(lat, lon).unwrap();
            prop_assert_eq!(c.latitude(), lat);
            prop_assert_eq!(c.longitude(), lon);
        }

        /// Latitudes beyond the poles are always rejected.
        #[test]
        fn out_of_range_latitude_rejected(lat in 90.0001f64..1e6, lon in -180.0f64..=180.0) {
            prop_assert!(Coordinate::new(lat, lon).is_err());
            prop_assert!(Coordinate::new(-lat, lon).is_err());
        }
    }
}
