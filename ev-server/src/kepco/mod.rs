//! KEPCO (Korea Electric Power Corporation) EV charger open-data client.
//!
//! The public data portal exposes charger locations as XML via
//! `EvInfoServiceV2/getEvSearchList`. Characteristics worth knowing:
//! - The response `<header>` carries its own result code; `"00"` means
//!   success even when the HTTP status is 200.
//! - Missing coordinates come back as `0`, so `(0, 0)` is a "coordinate
//!   unavailable" sentinel, not a real position.
//! - A single malformed `<item>` is skipped, never fatal.

mod client;
mod error;
mod parse;

pub use client::{KepcoClient, KepcoConfig};
pub use error::KepcoError;
pub use parse::parse_station_list;
