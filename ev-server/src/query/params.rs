//! Query parameters and validation.

use std::collections::{HashMap, HashSet};

use crate::domain::{Coordinate, FilterField, StationRecord};

/// Error from query parameter validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// Non-finite reference coordinate or negative radius.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Parameters for one proximity query: a reference point, a search radius,
/// and per-field categorical constraints.
///
/// Validated at construction, so a `QueryParameters` value is always safe
/// to run. A field with no constraint accepts every value; a constrained
/// field accepts exactly the supplied set. "Select all" is expressed by the
/// caller passing the repository's full distinct-value set for the field.
///
/// # Examples
///
/// ```
/// use ev_server::domain::FilterField;
/// use ev_server::query::QueryParameters;
///
/// let params = QueryParameters::new(37.5665, 126.9780, 2.0)
///     .unwrap()
///     .with_filter(FilterField::Operator, ["KEPCO".to_string()]);
/// assert_eq!(params.radius_km(), 2.0);
///
/// assert!(QueryParameters::new(37.5665, 126.9780, -1.0).is_err());
/// assert!(QueryParameters::new(f64::NAN, 126.9780, 2.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct QueryParameters {
    reference: Coordinate,
    radius_km: f64,
    filters: HashMap<FilterField, HashSet<String>>,
}

impl QueryParameters {
    /// Validate and construct query parameters.
    ///
    /// Malformed input is rejected here, never silently corrected. A radius
    /// of zero is legal and matches only stations at distance exactly zero.
    pub fn new(latitude: f64, longitude: f64, radius_km: f64) -> Result<Self, QueryError> {
        let reference = Coordinate::new(latitude, longitude)
            .map_err(|e| QueryError::InvalidParameter(e.to_string()))?;

        if !radius_km.is_finite() {
            return Err(QueryError::InvalidParameter(
                "radius must be finite".to_string(),
            ));
        }

        if radius_km < 0.0 {
            return Err(QueryError::InvalidParameter(
                "radius must not be negative".to_string(),
            ));
        }

        Ok(Self {
            reference,
            radius_km,
            filters: HashMap::new(),
        })
    }

    /// Constrain a field to a set of accepted values.
    ///
    /// An empty set is treated the same as no constraint: accept all.
    /// Calling this again for the same field replaces the earlier set.
    pub fn with_filter(
        mut self,
        field: FilterField,
        accepted: impl IntoIterator<Item = String>,
    ) -> Self {
        let accepted: HashSet<String> = accepted.into_iter().collect();
        if accepted.is_empty() {
            self.filters.remove(&field);
        } else {
            self.filters.insert(field, accepted);
        }
        self
    }

    /// The reference point distances are measured from.
    pub fn reference(&self) -> Coordinate {
        self.reference
    }

    /// The inclusive search radius in kilometres.
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Whether a record passes every categorical constraint.
    pub(crate) fn accepts(&self, record: &StationRecord) -> bool {
        self.filters
            .iter()
            .all(|(field, accepted)| accepted.contains(field.value_of(record)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UNKNOWN_CATEGORY;

    fn record(operator: &str, status: Option<&str>) -> StationRecord {
        StationRecord {
            name: "S".into(),
            address: "addr".into(),
            coordinate: Coordinate::new(37.5, 127.0).unwrap(),
            connector_type: "DC combo".into(),
            operator: operator.into(),
            access_restriction: "open".into(),
            place_type: UNKNOWN_CATEGORY.into(),
            charge_speed: "fast".into(),
            status: status.map(Into::into),
        }
    }

    #[test]
    fn rejects_non_finite_reference() {
        assert!(QueryParameters::new(f64::NAN, 127.0, 1.0).is_err());
        assert!(QueryParameters::new(37.5, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn rejects_negative_or_non_finite_radius() {
        assert!(QueryParameters::new(37.5, 127.0, -0.1).is_err());
        assert!(QueryParameters::new(37.5, 127.0, f64::NAN).is_err());
        assert!(QueryParameters::new(37.5, 127.0, f64::INFINITY).is_err());
    }

    #[test]
    fn zero_radius_is_legal() {
        let params = QueryParameters::new(37.5, 127.0, 0.0).unwrap();
        assert_eq!(params.radius_km(), 0.0);
    }

    #[test]
    fn unconstrained_fields_accept_everything() {
        let params = QueryParameters::new(37.5, 127.0, 1.0).unwrap();
        assert!(params.accepts(&record("KEPCO", None)));
        assert!(params.accepts(&record("anyone", Some("broken"))));
    }

    #[test]
    fn constrained_field_is_membership_test() {
        let params = QueryParameters::new(37.5, 127.0, 1.0)
            .unwrap()
            .with_filter(FilterField::Operator, ["KEPCO".to_string()]);

        assert!(params.accepts(&record("KEPCO", None)));
        assert!(!params.accepts(&record("Envision", None)));
    }

    #[test]
    fn constraints_on_multiple_fields_are_conjunctive() {
        let params = QueryParameters::new(37.5, 127.0, 1.0)
            .unwrap()
            .with_filter(FilterField::Operator, ["KEPCO".to_string()])
            .with_filter(FilterField::Status, ["available".to_string()]);

        assert!(params.accepts(&record("KEPCO", Some("available"))));
        assert!(!params.accepts(&record("KEPCO", Some("in use"))));
        assert!(!params.accepts(&record("Envision", Some("available"))));
    }

    #[test]
    fn empty_accepted_set_means_accept_all() {
        let params = QueryParameters::new(37.5, 127.0, 1.0)
            .unwrap()
            .with_filter(FilterField::Operator, Vec::<String>::new());

        assert!(params.accepts(&record("KEPCO", None)));
        assert!(params.accepts(&record("Envision", None)));
    }

    #[test]
    fn missing_value_matches_only_if_unknown_included() {
        // Status is absent, so the record's effective value is "unknown".
        let with_unknown = QueryParameters::new(37.5, 127.0, 1.0)
            .unwrap()
            .with_filter(
                FilterField::Status,
                ["available".to_string(), UNKNOWN_CATEGORY.to_string()],
            );
        assert!(with_unknown.accepts(&record("KEPCO", None)));

        let without_unknown = QueryParameters::new(37.5, 127.0, 1.0)
            .unwrap()
            .with_filter(FilterField::Status, ["available".to_string()]);
        assert!(!without_unknown.accepts(&record("KEPCO", None)));
    }
}
