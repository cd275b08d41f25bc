//! Proximity query engine.
//!
//! Runs one query over a repository snapshot: annotate every record with
//! its haversine distance from the reference point, keep those that pass
//! the categorical and radius filters, and return them nearest-first.

use crate::domain::StationRecord;
use crate::geo::haversine_km;
use crate::repository::StationRepository;

use super::params::QueryParameters;

/// One matching station with its computed distance.
///
/// Borrows the repository record; the original is never mutated.
#[derive(Debug, Clone, Copy)]
pub struct QueryHit<'a> {
    pub station: &'a StationRecord,
    pub distance_km: f64,
}

/// An ordered query result, ascending by distance.
///
/// Ties keep repository load order (the sort is stable), and each station
/// appears at most once because the engine walks the repository exactly
/// once.
#[derive(Debug, Clone, Default)]
pub struct QueryResult<'a> {
    hits: Vec<QueryHit<'a>>,
}

impl<'a> QueryResult<'a> {
    pub fn hits(&self) -> &[QueryHit<'a>] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueryHit<'a>> {
        self.hits.iter()
    }
}

impl<'a> IntoIterator for QueryResult<'a> {
    type Item = QueryHit<'a>;
    type IntoIter = std::vec::IntoIter<QueryHit<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

/// Stateless query engine over one repository snapshot.
///
/// Each call is a pure function of (repository, parameters): no shared
/// mutable state, so results are identical for identical inputs.
pub struct QueryEngine<'a> {
    repository: &'a StationRepository,
}

impl<'a> QueryEngine<'a> {
    pub fn new(repository: &'a StationRepository) -> Self {
        Self { repository }
    }

    /// Run a query.
    ///
    /// Malformed input cannot reach this point: [`QueryParameters`] are
    /// validated at construction, and the repository only holds records
    /// with valid coordinates, so the query itself never fails. The radius
    /// boundary is inclusive, and a zero radius keeps only stations at
    /// distance exactly zero — no tolerance is added to the raw value.
    pub fn query(&self, params: &QueryParameters) -> QueryResult<'a> {
        let reference = params.reference();

        let mut hits: Vec<QueryHit<'a>> = self
            .repository
            .all_records()
            .iter()
            .filter(|record| params.accepts(record))
            .map(|record| QueryHit {
                station: record,
                distance_km: haversine_km(reference, record.coordinate),
            })
            .filter(|hit| hit.distance_km <= params.radius_km())
            .collect();

        // Stable: equal distances keep repository order.
        hits.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        QueryResult { hits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, FilterField, UNKNOWN_CATEGORY};
    use crate::repository::{DataSource, RawStation, StationRepository};

    fn raw(name: &str, lat: f64, lon: f64, operator: &str) -> RawStation {
        RawStation {
            name: name.into(),
            address: format!("{name} address"),
            latitude: Some(lat),
            longitude: Some(lon),
            connector_type: Some("DC combo".into()),
            operator: Some(operator.into()),
            access_restriction: Some("open".into()),
            place_type: None,
            charge_speed: Some("fast".into()),
            status: None,
        }
    }

    fn city_hall_repo() -> StationRepository {
        StationRepository::from_raw(
            vec![raw("CityHallCharger", 37.5651, 126.9895, "KEPCO")],
            DataSource::Dataset,
        )
    }

    fn params(radius_km: f64) -> QueryParameters {
        // Seoul City Hall reference point.
        QueryParameters::new(37.5665, 126.9780, radius_km).unwrap()
    }

    #[test]
    fn finds_station_within_radius() {
        let repo = city_hall_repo();
        let result = QueryEngine::new(&repo).query(&params(2.0));

        assert_eq!(result.len(), 1);
        let hit = &result.hits()[0];
        assert_eq!(hit.station.name, "CityHallCharger");
        assert!((hit.distance_km - 1.02).abs() < 0.05, "distance was {}", hit.distance_km);
    }

    #[test]
    fn radius_excludes_distant_station() {
        let repo = city_hall_repo();
        let result = QueryEngine::new(&repo).query(&params(0.5));
        assert!(result.is_empty());
    }

    #[test]
    fn zero_radius_matches_only_exact_location() {
        let repo = StationRepository::from_raw(
            vec![
                raw("here", 37.5665, 126.9780, "KEPCO"),
                raw("near", 37.5666, 126.9780, "KEPCO"),
            ],
            DataSource::Dataset,
        );

        let result = QueryEngine::new(&repo).query(&params(0.0));
        assert_eq!(result.len(), 1);
        assert_eq!(result.hits()[0].station.name, "here");
        assert_eq!(result.hits()[0].distance_km, 0.0);
    }

    #[test]
    fn results_sorted_ascending_by_distance() {
        let repo = StationRepository::from_raw(
            vec![
                raw("far", 37.60, 126.9780, "KEPCO"),
                raw("near", 37.57, 126.9780, "KEPCO"),
                raw("mid", 37.58, 126.9780, "KEPCO"),
            ],
            DataSource::Dataset,
        );

        let result = QueryEngine::new(&repo).query(&params(10.0));
        let names: Vec<&str> = result.iter().map(|h| h.station.name.as_str()).collect();
        assert_eq!(names, ["near", "mid", "far"]);

        for pair in result.hits().windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }

    #[test]
    fn equidistant_stations_keep_load_order() {
        // Two stations at the same offset north and the same offset south
        // of the reference latitude: identical distances.
        let repo = StationRepository::from_raw(
            vec![
                raw("second-loaded-first", 37.5765, 126.9780, "KEPCO"),
                raw("loaded-after", 37.5565, 126.9780, "KEPCO"),
            ],
            DataSource::Dataset,
        );

        let result = QueryEngine::new(&repo).query(&params(5.0));
        assert_eq!(result.len(), 2);
        assert_eq!(result.hits()[0].distance_km, result.hits()[1].distance_km);
        assert_eq!(result.hits()[0].station.name, "second-loaded-first");
        assert_eq!(result.hits()[1].station.name, "loaded-after");
    }

    #[test]
    fn categorical_filter_applies_before_radius() {
        let repo = StationRepository::from_raw(
            vec![
                raw("kepco-near", 37.5670, 126.9780, "KEPCO"),
                raw("other-nearer", 37.5666, 126.9780, "Envision"),
            ],
            DataSource::Dataset,
        );

        let filtered = params(5.0).with_filter(FilterField::Operator, ["KEPCO".to_string()]);
        let result = QueryEngine::new(&repo).query(&filtered);

        assert_eq!(result.len(), 1);
        assert_eq!(result.hits()[0].station.name, "kepco-near");
    }

    #[test]
    fn select_all_set_includes_unknown_category() {
        let mut no_operator = raw("mystery", 37.5670, 126.9780, "");
        no_operator.operator = None;
        let repo = StationRepository::from_raw(
            vec![raw("kepco", 37.5666, 126.9780, "KEPCO"), no_operator],
            DataSource::Dataset,
        );

        // "Select all" as the UI does it: pass the full distinct set.
        let all_values = repo.distinct_values(FilterField::Operator);
        let select_all = params(5.0).with_filter(FilterField::Operator, all_values);
        assert_eq!(QueryEngine::new(&repo).query(&select_all).len(), 2);

        // Without "unknown" in the set, the missing-valued record drops out.
        let named_only = params(5.0).with_filter(FilterField::Operator, ["KEPCO".to_string()]);
        let result = QueryEngine::new(&repo).query(&named_only);
        assert_eq!(result.len(), 1);
        assert_eq!(result.hits()[0].station.name, "kepco");
        assert_ne!(result.hits()[0].station.operator, UNKNOWN_CATEGORY);
    }

    #[test]
    fn empty_repository_returns_empty_result() {
        let repo = StationRepository::from_raw(Vec::new(), DataSource::Dataset);
        let result = QueryEngine::new(&repo).query(&params(10.0));
        assert!(result.is_empty());
    }

    #[test]
    fn no_station_appears_twice() {
        let repo = StationRepository::from_raw(
            vec![
                raw("A", 37.5670, 126.9780, "KEPCO"),
                raw("B", 37.5680, 126.9780, "KEPCO"),
            ],
            DataSource::Dataset,
        );

        let result = QueryEngine::new(&repo).query(&params(5.0));
        let mut seen = std::collections::HashSet::new();
        for hit in result.iter() {
            assert!(seen.insert((hit.station.name.clone(), hit.station.address.clone())));
        }
    }

    #[test]
    fn station_exactly_on_radius_boundary_included() {
        let reference = Coordinate::new(37.5665, 126.9780).unwrap();
        let repo = city_hall_repo();
        let exact = haversine_km(reference, repo.all_records()[0].coordinate);

        let result = QueryEngine::new(&repo)
            .query(&QueryParameters::new(37.5665, 126.9780, exact).unwrap());
        assert_eq!(result.len(), 1);
    }
}
