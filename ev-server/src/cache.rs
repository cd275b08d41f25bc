//! Caching layer for upstream lookups.
//!
//! The charger dataset changes slowly, so live API loads are cached for an
//! hour; geocoding results are effectively static and are kept for a day.
//! Both wrap their client behind the same interface the uncached client
//! exposes, so callers don't care which they hold.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::Coordinate;
use crate::geocode::{GeocodeError, NominatimClient};
use crate::kepco::{KepcoClient, KepcoError};
use crate::repository::{DataSource, StationRepository};

/// Configuration for the caches.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached station data loads.
    pub station_ttl: Duration,

    /// TTL for cached geocoding results.
    pub geocode_ttl: Duration,

    /// Maximum number of cached entries per cache.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            station_ttl: Duration::from_secs(60 * 60),
            geocode_ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 1000,
        }
    }
}

/// KEPCO client with a repository cache.
///
/// Each cache entry is a fully built repository for one address filter
/// (usually the empty filter, meaning "everything"), shared via `Arc` so
/// concurrent queries read the same snapshot.
pub struct CachedKepcoClient {
    client: KepcoClient,
    repositories: MokaCache<String, Arc<StationRepository>>,
}

impl CachedKepcoClient {
    /// Create a new cached client.
    pub fn new(client: KepcoClient, config: &CacheConfig) -> Self {
        let repositories = MokaCache::builder()
            .time_to_live(config.station_ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            client,
            repositories,
        }
    }

    /// Get the station repository for an address filter, fetching and
    /// normalizing on a cache miss.
    ///
    /// Fetch errors are not cached; the next call retries.
    pub async fn fetch_repository(
        &self,
        addr: &str,
    ) -> Result<Arc<StationRepository>, KepcoError> {
        if let Some(cached) = self.repositories.get(addr).await {
            return Ok(cached);
        }

        let rows = self.client.fetch_stations(addr).await?;
        let repository = Arc::new(StationRepository::from_raw(rows, DataSource::LiveApi));

        self.repositories
            .insert(addr.to_string(), repository.clone())
            .await;

        Ok(repository)
    }

    /// Number of cached repository snapshots.
    pub fn entry_count(&self) -> u64 {
        self.repositories.entry_count()
    }

    /// Drop all cached snapshots; the next fetch hits the API.
    pub fn invalidate_all(&self) {
        self.repositories.invalidate_all();
    }
}

/// Geocoder with a result cache.
///
/// Caches both found coordinates and definitive "not found" answers;
/// transient errors (network, upstream failures) are never cached.
pub struct CachedGeocoder {
    client: NominatimClient,
    lookups: MokaCache<String, Option<Coordinate>>,
}

impl CachedGeocoder {
    /// Create a new cached geocoder.
    pub fn new(client: NominatimClient, config: &CacheConfig) -> Self {
        let lookups = MokaCache::builder()
            .time_to_live(config.geocode_ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, lookups }
    }

    /// Resolve an address, consulting the cache first.
    pub async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let key = address.trim().to_string();

        if let Some(cached) = self.lookups.get(&key).await {
            return cached.ok_or(GeocodeError::NotFound);
        }

        match self.client.geocode(&key).await {
            Ok(coordinate) => {
                self.lookups.insert(key, Some(coordinate)).await;
                Ok(coordinate)
            }
            Err(GeocodeError::NotFound) => {
                self.lookups.insert(key, None).await;
                Err(GeocodeError::NotFound)
            }
            Err(e) => Err(e),
        }
    }

    /// Number of cached lookups.
    pub fn entry_count(&self) -> u64 {
        self.lookups.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::GeocodeConfig;
    use crate::kepco::KepcoConfig;

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.station_ttl, Duration::from_secs(3600));
        assert_eq!(config.geocode_ttl, Duration::from_secs(86400));
        assert_eq!(config.max_capacity, 1000);
    }

    #[test]
    fn cached_kepco_starts_empty() {
        let client = KepcoClient::new(KepcoConfig::new("test-key")).unwrap();
        let cached = CachedKepcoClient::new(client, &CacheConfig::default());
        assert_eq!(cached.entry_count(), 0);
    }

    #[test]
    fn cached_geocoder_starts_empty() {
        let client = NominatimClient::new(GeocodeConfig::new("ev-locator-test")).unwrap();
        let cached = CachedGeocoder::new(client, &CacheConfig::default());
        assert_eq!(cached.entry_count(), 0);
    }
}
