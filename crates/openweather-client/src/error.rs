//! OpenWeather client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    /// Transport failure. The request URL is stripped before wrapping.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Location not found: {0}")]
    NotFound(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response missing field: {0}")]
    MissingField(&'static str),
}

impl From<reqwest::Error> for WeatherError {
    fn from(e: reqwest::Error) -> Self {
        // Request URLs can carry the API key as a query parameter.
        WeatherError::Http(e.without_url())
    }
}
