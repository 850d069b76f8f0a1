//! Giphy search API types.

use serde::Deserialize;

/// General-audience content rating.
pub const RATING_G: &str = "g";

/// Search parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub term: String,
    pub limit: u32,
    pub rating: &'static str,
}

impl SearchQuery {
    /// Up to 10 general-audience results for `term`.
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            limit: 10,
            rating: RATING_G,
        }
    }
}

/// `/v1/gifs/search` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<Gif>,
}

/// A single search hit.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Gif {
    #[serde(default)]
    pub id: Option<String>,
    /// Public page URL for the gif. Empty when the hit carries none.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Error body Giphy sends with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
