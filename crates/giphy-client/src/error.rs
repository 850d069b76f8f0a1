//! Giphy client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GiphyError {
    /// Transport failure. The request URL is stripped before wrapping.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Authentication failed")]
    Unauthorized,

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for GiphyError {
    fn from(e: reqwest::Error) -> Self {
        // Request URLs can carry the API key as a query parameter.
        GiphyError::Http(e.without_url())
    }
}
