//! Charging station record and categorical field selectors.

use std::fmt;
use std::str::FromStr;

use super::coord::Coordinate;

/// Placeholder category assigned when a source omits a categorical value.
///
/// Treating "missing" as its own category keeps it selectable: a caller that
/// passes the full distinct-value set (the UI's "select all") includes
/// unknown-valued records, while a caller that enumerates specific values
/// excludes them.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// One physical charging station.
///
/// Records are normalized at ingestion and held immutably for the lifetime
/// of a data load. The name is a display identifier and is not guaranteed
/// unique. Queries never mutate a record; computed distances are attached
/// alongside, not written into it.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    /// Display name.
    pub name: String,

    /// Free-text address.
    pub address: String,

    /// Validated position. Records without one never enter the repository.
    pub coordinate: Coordinate,

    /// Connector type code or label, depending on source.
    pub connector_type: String,

    /// Operating organisation.
    pub operator: String,

    /// Access restriction category, also used for marker colouring.
    pub access_restriction: String,

    /// Kind of place the station is installed at.
    pub place_type: String,

    /// Charging speed category.
    pub charge_speed: String,

    /// Charger operational state. Only the live API reports this.
    pub status: Option<String>,
}

/// Error returned when parsing an unrecognised filter field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter field: {name}")]
pub struct UnknownFilterField {
    name: String,
}

/// The categorical fields of a [`StationRecord`] that queries can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    ConnectorType,
    Operator,
    AccessRestriction,
    PlaceType,
    ChargeSpeed,
    Status,
}

impl FilterField {
    /// All filterable fields, in display order.
    pub const ALL: [FilterField; 6] = [
        FilterField::ConnectorType,
        FilterField::Operator,
        FilterField::AccessRestriction,
        FilterField::PlaceType,
        FilterField::ChargeSpeed,
        FilterField::Status,
    ];

    /// The record's value for this field.
    ///
    /// A missing optional value reads as [`UNKNOWN_CATEGORY`], so filters
    /// only ever compare concrete strings.
    pub fn value_of<'a>(&self, record: &'a StationRecord) -> &'a str {
        match self {
            FilterField::ConnectorType => &record.connector_type,
            FilterField::Operator => &record.operator,
            FilterField::AccessRestriction => &record.access_restriction,
            FilterField::PlaceType => &record.place_type,
            FilterField::ChargeSpeed => &record.charge_speed,
            FilterField::Status => record.status.as_deref().unwrap_or(UNKNOWN_CATEGORY),
        }
    }

    /// Stable wire name for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::ConnectorType => "connector_type",
            FilterField::Operator => "operator",
            FilterField::AccessRestriction => "access_restriction",
            FilterField::PlaceType => "place_type",
            FilterField::ChargeSpeed => "charge_speed",
            FilterField::Status => "status",
        }
    }
}

impl FromStr for FilterField {
    type Err = UnknownFilterField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownFilterField {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
