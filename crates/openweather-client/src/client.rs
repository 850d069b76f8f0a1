//! OpenWeather HTTP client.

use crate::error::WeatherError;
use crate::types::*;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Unit system requested from the API; the bot reports °F and mph.
const UNITS: &str = "imperial";

/// OpenWeather current-weather client.
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl OpenWeatherClient {
    /// Create a new OpenWeather client.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, WeatherError> {
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

    /// Fetch current weather for a free-form city name.
    #[instrument(skip(self))]
    pub async fn current_weather(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        let response = self
            .client
            .get(format!("{}/data/2.5/weather", self.base_url))
            .query(&[
                ("q", city),
                ("appid", self.api_key.expose_secret().as_str()),
                ("units", UNITS),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::status_error(status, city, &body));
        }

        debug!("Response body: {}", body.chars().take(200).collect::<String>());
        let parsed: CurrentWeatherResponse = serde_json::from_str(&body)?;
        WeatherReport::try_from(parsed)
    }

    fn status_error(status: StatusCode, city: &str, body: &str) -> WeatherError {
        match status {
            StatusCode::UNAUTHORIZED => {
                warn!("Authentication failed");
                WeatherError::Unauthorized
            }
            StatusCode::NOT_FOUND => WeatherError::NotFound(city.to_string()),
            _ => {
                let message = serde_json::from_str::<ErrorBody>(body)
                    .map(|e| e.message)
                    .unwrap_or_else(|_| body.to_string());
                WeatherError::Api {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}
