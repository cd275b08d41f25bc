//! Address-to-coordinate lookup via Nominatim.
//!
//! The locator treats geocoding as an opaque collaborator: a free-text
//! address in, a coordinate or "not found" out. The public Nominatim
//! instance requires a User-Agent and polite request spacing, both
//! handled by the client.

mod client;
mod error;

pub use client::{GeocodeConfig, NominatimClient};
pub use error::GeocodeError;
