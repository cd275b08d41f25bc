use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use ev_server::cache::{CacheConfig, CachedGeocoder, CachedKepcoClient};
use ev_server::geocode::{GeocodeConfig, NominatimClient};
use ev_server::ingest::load_dataset;
use ev_server::kepco::{KepcoClient, KepcoConfig};
use ev_server::repository::{DataSource, StationRepository};
use ev_server::web::{AppState, StationSource, create_router};

/// User agent sent to the geocoding service.
const GEOCODE_USER_AGENT: &str = "ev-charging-locator/0.1";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cache_config = CacheConfig::default();

    // Station data: a dataset extract takes precedence, otherwise the
    // live KEPCO API is used (and needs a service key).
    let stations = match std::env::var("EV_DATASET") {
        Ok(path) => {
            let path = PathBuf::from(path);
            let rows = load_dataset(&path).expect("Failed to load station dataset");
            let repository = StationRepository::from_raw(rows, DataSource::Dataset);
            info!(stations = repository.len(), path = %path.display(), "loaded dataset");
            StationSource::Static(Arc::new(repository))
        }
        Err(_) => {
            let service_key = std::env::var("KEPCO_SERVICE_KEY").unwrap_or_else(|_| {
                eprintln!("Warning: neither EV_DATASET nor KEPCO_SERVICE_KEY set. API calls will fail.");
                String::new()
            });

            let client = KepcoClient::new(KepcoConfig::new(&service_key))
                .expect("Failed to create KEPCO client");
            let cached = CachedKepcoClient::new(client, &cache_config);

            // Fail fast if the API is unusable.
            let repository = cached
                .fetch_repository("")
                .await
                .expect("Failed to fetch station data from the KEPCO API");
            info!(stations = repository.len(), "loaded stations from KEPCO API");

            StationSource::Live(cached)
        }
    };

    let geocoder = NominatimClient::new(GeocodeConfig::new(GEOCODE_USER_AGENT))
        .expect("Failed to create geocoding client");
    let geocoder = CachedGeocoder::new(geocoder, &cache_config);

    let state = AppState::new(stations, geocoder);
    let app = create_router(state);

    let addr: SocketAddr = std::env::var("EV_BIND")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()
        .expect("EV_BIND must be a socket address");

    info!(%addr, "EV charging station locator listening");
    info!("open http://{addr} in your browser for the map interface");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
