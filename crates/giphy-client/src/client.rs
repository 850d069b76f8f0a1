//! Giphy HTTP client.

use crate::error::GiphyError;
use crate::types::*;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Giphy search client.
#[derive(Clone)]
pub struct GiphyClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl GiphyClient {
    /// Create a new Giphy client.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GiphyError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: SecretString::new(api_key.into()),
        })
    }

    /// Search gifs. An empty vector means the search matched nothing.
    #[instrument(skip(self, query), fields(term = %query.term, limit = query.limit))]
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Gif>, GiphyError> {
        let limit = query.limit.to_string();
        let response = self
            .client
            .get(format!("{}/v1/gifs/search", self.base_url))
            .query(&[
                ("api_key", self.api_key.expose_secret().as_str()),
                ("q", query.term.as_str()),
                ("limit", limit.as_str()),
                ("rating", query.rating),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        debug!("Search returned {} results", parsed.data.len());
        Ok(parsed.data)
    }

    fn status_error(status: StatusCode, body: &str) -> GiphyError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("Rate limit exceeded");
                GiphyError::RateLimit
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!("Authentication failed");
                GiphyError::Unauthorized
            }
            _ => {
                let message = serde_json::from_str::<ErrorBody>(body)
                    .map(|e| e.message)
                    .unwrap_or_else(|_| body.to_string());
                GiphyError::Api {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}
