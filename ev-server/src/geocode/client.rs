//! Nominatim geocoding client.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::domain::Coordinate;

use super::error::GeocodeError;

/// Default base URL for the public Nominatim instance.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Default minimum delay between requests.
///
/// The public Nominatim usage policy requires at most one request per
/// second; we stay a little under that.
const DEFAULT_MIN_DELAY_MS: u64 = 1500;

/// One search result from Nominatim. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL for the Nominatim instance
    pub base_url: String,
    /// User-Agent header, required by the Nominatim usage policy
    pub user_agent: String,
    /// Minimum delay between consecutive requests
    pub min_delay: Duration,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: user_agent.into(),
            min_delay: Duration::from_millis(DEFAULT_MIN_DELAY_MS),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the minimum delay between requests.
    pub fn with_min_delay(mut self, delay: Duration) -> Self {
        self.min_delay = delay;
        self
    }
}

/// Client for the Nominatim search API.
///
/// Requests are serialized and spaced at least `min_delay` apart, so the
/// client can be shared freely without tripping the upstream rate limit.
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
    min_delay: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl NominatimClient {
    /// Create a new geocoding client.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| GeocodeError::Api {
                status: 0,
                message: "Invalid user agent".to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            min_delay: config.min_delay,
            last_request: Mutex::new(None),
        })
    }

    /// Resolve a free-text address to a coordinate.
    ///
    /// Returns [`GeocodeError::NotFound`] when the service has no match.
    pub async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        // Holding the lock across the request serializes callers and
        // enforces the spacing between consecutive requests.
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_delay {
                tokio::time::sleep(self.min_delay - elapsed).await;
            }
        }

        let url = format!("{}/search", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("q", address), ("format", "jsonv2"), ("limit", "1")])
            .send()
            .await;
        *last = Some(Instant::now());
        drop(last);

        let response = response?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let places: Vec<Place> = serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
        })?;

        let place = places.into_iter().next().ok_or(GeocodeError::NotFound)?;

        let lat: f64 = place
            .lat
            .parse()
            .map_err(|_| GeocodeError::InvalidCoordinate)?;
        let lon: f64 = place
            .lon
            .parse()
            .map_err(|_| GeocodeError::InvalidCoordinate)?;

        Coordinate::new(lat, lon).map_err(|_| GeocodeError::InvalidCoordinate)
    }
}
