//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CachedGeocoder, CachedKepcoClient};
use crate::kepco::KepcoError;
use crate::repository::StationRepository;

/// Where request handlers get their station data from.
///
/// A static dataset is loaded once and shared for the server's lifetime;
/// the live API is re-fetched through the cache when its TTL lapses.
/// Either way a handler sees one immutable repository snapshot per request.
pub enum StationSource {
    /// Fixed snapshot from a dataset extract.
    Static(Arc<StationRepository>),

    /// Cached live loads from the KEPCO API.
    Live(CachedKepcoClient),
}

impl StationSource {
    /// The current repository snapshot.
    pub async fn repository(&self) -> Result<Arc<StationRepository>, KepcoError> {
        match self {
            StationSource::Static(repository) => Ok(repository.clone()),
            StationSource::Live(client) => client.fetch_repository("").await,
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station data source
    pub stations: Arc<StationSource>,

    /// Cached address-to-coordinate lookup
    pub geocoder: Arc<CachedGeocoder>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: StationSource, geocoder: CachedGeocoder) -> Self {
        Self {
            stations: Arc::new(stations),
            geocoder: Arc::new(geocoder),
        }
    }
}
