//! KEPCO open-data HTTP client.

use crate::repository::RawStation;

use super::error::KepcoError;
use super::parse::parse_station_list;

/// Default base URL for the KEPCO EV charger service.
///
/// The public data portal serves this operation over plain HTTP.
const DEFAULT_BASE_URL: &str = "http://openapi.kepco.co.kr/service/EvInfoServiceV2";

/// Default number of rows to request per call.
const DEFAULT_NUM_ROWS: u32 = 1000;

/// Configuration for the KEPCO client.
#[derive(Debug, Clone)]
pub struct KepcoConfig {
    /// Service key issued by the public data portal
    pub service_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Rows per request
    pub num_rows: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl KepcoConfig {
    /// Create a new config with the given service key.
    pub fn new(service_key: impl Into<String>) -> Self {
        Self {
            service_key: service_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            num_rows: DEFAULT_NUM_ROWS,
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the rows-per-request page size.
    pub fn with_num_rows(mut self, n: u32) -> Self {
        self.num_rows = n;
        self
    }
}

/// Client for the KEPCO EV charger API.
#[derive(Debug, Clone)]
pub struct KepcoClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
    num_rows: u32,
}

impl KepcoClient {
    /// Create a new KEPCO client.
    pub fn new(config: KepcoConfig) -> Result<Self, KepcoError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            service_key: config.service_key,
            num_rows: config.num_rows,
        })
    }

    /// Fetch charger rows, optionally restricted to an address substring.
    ///
    /// Pass an empty `addr` to fetch without an address restriction. Rows
    /// come back unnormalized; the repository applies the coordinate drop
    /// rules, including the API's `(0, 0)` sentinel.
    pub async fn fetch_stations(&self, addr: &str) -> Result<Vec<RawStation>, KepcoError> {
        let url = format!("{}/getEvSearchList", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("serviceKey", self.service_key.as_str()),
                ("pageNo", "1"),
                ("numOfRows", &self.num_rows.to_string()),
                ("addr", addr),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(KepcoError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(KepcoError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KepcoError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        parse_station_list(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = KepcoConfig::new("test-service-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.num_rows, 1000);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn config_builder() {
        let config = KepcoConfig::new("test-service-key")
            .with_base_url("http://localhost:8080")
            .with_num_rows(50);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.num_rows, 50);
    }

    #[test]
    fn client_creation() {
        let client = KepcoClient::new(KepcoConfig::new("test-service-key"));
        assert!(client.is_ok());
    }
}
