//! KEPCO client error types.

/// Errors from the KEPCO open-data HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum KepcoError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid or missing service key
    #[error("unauthorized: check KEPCO_SERVICE_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by the KEPCO API")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// API response header carried a non-success result code
    #[error("API result {code}: {message}")]
    ResultCode { code: String, message: String },

    /// Response body was not well-formed XML
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),
}
