//! Data transfer objects for web requests and responses.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, StationRecord};
use crate::query::QueryHit;

use super::links::{kakao_directions_url, naver_directions_url};

/// Request body for a proximity search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Reference point latitude in degrees
    pub latitude: f64,

    /// Reference point longitude in degrees
    pub longitude: f64,

    /// Inclusive search radius in kilometres
    pub radius_km: f64,

    /// Accepted values per categorical field, keyed by field name.
    /// An omitted field or empty list accepts everything.
    #[serde(default)]
    pub filters: HashMap<String, Vec<String>>,
}

/// A station as exposed by the API.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub connector_type: String,
    pub operator: String,
    pub access_restriction: String,
    pub place_type: String,
    pub charge_speed: String,

    /// Charger state; only present for live-API data
    pub status: Option<String>,
}

impl StationResult {
    /// Create from a domain record.
    pub fn from_record(record: &StationRecord) -> Self {
        Self {
            name: record.name.clone(),
            address: record.address.clone(),
            latitude: record.coordinate.latitude(),
            longitude: record.coordinate.longitude(),
            connector_type: record.connector_type.clone(),
            operator: record.operator.clone(),
            access_restriction: record.access_restriction.clone(),
            place_type: record.place_type.clone(),
            charge_speed: record.charge_speed.clone(),
            status: record.status.clone(),
        }
    }
}

/// One search match: the station, its distance, and outbound links.
#[derive(Debug, Serialize)]
pub struct SearchHitResult {
    #[serde(flatten)]
    pub station: StationResult,

    /// Great-circle distance from the reference point in kilometres
    pub distance_km: f64,

    /// Kakao Map directions link
    pub kakao_url: String,

    /// Naver Map directions link
    pub naver_url: String,
}

impl SearchHitResult {
    /// Create from a query hit, with links relative to the reference point.
    pub fn from_hit(hit: &QueryHit<'_>, reference: Coordinate) -> Self {
        Self {
            station: StationResult::from_record(hit.station),
            distance_km: hit.distance_km,
            kakao_url: kakao_directions_url(&hit.station.name, hit.station.coordinate),
            naver_url: naver_directions_url(reference, hit.station.coordinate),
        }
    }
}

/// Response for a proximity search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Number of matching stations
    pub count: usize,

    /// Matches, nearest first
    pub stations: Vec<SearchHitResult>,
}

/// Response listing all repository records.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub count: usize,
    pub stations: Vec<StationResult>,
}

/// Distinct values per categorical field, for "select all" UI expansion.
#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse {
    pub filters: BTreeMap<String, Vec<String>>,
}

/// Query string for a geocode lookup.
#[derive(Debug, Deserialize)]
pub struct GeocodeQuery {
    /// Free-text address
    pub q: String,
}

/// Response for a geocode lookup.
#[derive(Debug, Serialize)]
pub struct GeocodeResponse {
    pub latitude: f64,
    pub longitude: f64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
