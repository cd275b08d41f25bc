//! Web layer for the charging station locator.
//!
//! Serves the interactive map page and the JSON API used by it:
//! proximity search, filter options, and geocoding.

mod dto;
mod links;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use links::{kakao_directions_url, naver_directions_url};
pub use routes::{AppError, create_router};
pub use state::{AppState, StationSource};
