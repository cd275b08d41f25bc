//! Proximity query engine: distance annotation, categorical filtering,
//! and nearest-first ranking over a repository snapshot.

mod engine;
mod params;

pub use engine::{QueryEngine, QueryHit, QueryResult};
pub use params::{QueryError, QueryParameters};
