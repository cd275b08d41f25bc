//! Geocoder error types.

/// Errors from the Nominatim geocoding client.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// No coordinate found for the address
    #[error("address not found")]
    NotFound,

    /// The service returned a coordinate outside valid bounds
    #[error("geocoder returned an invalid coordinate")]
    InvalidCoordinate,
}
