//! In-memory station repository.
//!
//! Holds the normalized record set for one data load. Construction maps
//! heterogeneous source rows into [`StationRecord`]s and drops anything
//! without a usable coordinate; after that the collection is immutable and
//! safe to share read-only across request handlers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Coordinate, FilterField, StationRecord, UNKNOWN_CATEGORY};

/// Where a data load came from.
///
/// The live API reports missing coordinates as `(0, 0)` rather than
/// omitting them, so the drop rule differs per source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Static spreadsheet extract.
    Dataset,
    /// Live KEPCO open-data API.
    LiveApi,
}

/// One unnormalized source row, as produced by an ingestion collaborator.
///
/// Field names and formats are the collaborator's concern; this shape is
/// the adapter boundary between source-specific parsing and the typed
/// repository.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawStation {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub address: String,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    #[serde(default)]
    pub connector_type: Option<String>,

    #[serde(default)]
    pub operator: Option<String>,

    #[serde(default)]
    pub access_restriction: Option<String>,

    #[serde(default)]
    pub place_type: Option<String>,

    #[serde(default)]
    pub charge_speed: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

/// Immutable, normalized collection of charging stations.
pub struct StationRepository {
    records: Vec<StationRecord>,
}

impl StationRepository {
    /// Build a repository from raw source rows.
    ///
    /// Rows lacking a valid coordinate are skipped, not fatal: a single
    /// malformed source record never aborts the load. For [`DataSource::LiveApi`]
    /// the exact `(0, 0)` sentinel also counts as "coordinate unavailable".
    pub fn from_raw(rows: Vec<RawStation>, source: DataSource) -> Self {
        let total = rows.len();
        let records: Vec<StationRecord> = rows
            .into_iter()
            .filter_map(|row| match normalize(row, source) {
                Some(record) => Some(record),
                None => {
                    debug!("skipping station row without a valid coordinate");
                    None
                }
            })
            .collect();

        info!(
            loaded = records.len(),
            skipped = total - records.len(),
            source = ?source,
            "station repository built"
        );

        Self { records }
    }

    /// All records, in load order. Read-only.
    pub fn all_records(&self) -> &[StationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The sorted distinct values present for a categorical field.
    ///
    /// This is the set a UI expands "select all" into. Missing optional
    /// values appear here as [`UNKNOWN_CATEGORY`], making them selectable
    /// like any other category.
    pub fn distinct_values(&self, field: FilterField) -> BTreeSet<String> {
        self.records
            .iter()
            .map(|r| field.value_of(r).to_string())
            .collect()
    }
}

/// Map one raw row into a normalized record, or `None` if it has no
/// usable coordinate.
fn normalize(row: RawStation, source: DataSource) -> Option<StationRecord> {
    let coordinate = Coordinate::new(row.latitude?, row.longitude?).ok()?;

    if source == DataSource::LiveApi && coordinate.is_zero_zero() {
        return None;
    }

    let category = |value: Option<String>| {
        value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
    };

    Some(StationRecord {
        name: row.name,
        address: row.address,
        coordinate,
        connector_type: category(row.connector_type),
        operator: category(row.operator),
        access_restriction: category(row.access_restriction),
        place_type: category(row.place_type),
        charge_speed: category(row.charge_speed),
        status: row.status.filter(|v| !v.trim().is_empty()),
    })
}
