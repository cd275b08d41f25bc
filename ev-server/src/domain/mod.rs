//! Domain types for the charging station locator.
//!
//! These types represent validated station data. Invariants are enforced
//! at construction time, so code that receives them can trust their
//! validity: a `Coordinate` is always finite and in range, and a
//! `StationRecord` always carries one.

mod coord;
mod station;

pub use coord::{Coordinate, InvalidCoordinate};
pub use station::{FilterField, StationRecord, UNKNOWN_CATEGORY, UnknownFilterField};
