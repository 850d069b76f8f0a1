//! Weather command - current conditions from OpenWeather.

use crate::commands::CommandHandler;
use crate::providers::WeatherProvider;
use crate::types::{BotMessage, Reply};
use async_trait::async_trait;
use openweather_client::WeatherReport;
use std::sync::Arc;
use tracing::{error, instrument};

pub const USAGE: &str = "⚠️ Please provide a city name. Example: `!weather London`";
pub const APOLOGY: &str = "❌ Could not find weather data. Please check the city name.";

pub struct WeatherHandler {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherHandler {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Multi-line channel message for a report.
    pub fn format_report(report: &WeatherReport) -> String {
        format!(
            "🌍 **Weather in {}**:\n\
             ☁️ Description: {}\n\
             🌡️ Temperature: {}°F\n\
             💧 Humidity: {}%\n\
             🌬️ Wind Speed: {} mph",
            report.location,
            report.description,
            report.temperature,
            report.humidity,
            report.wind_speed
        )
    }
}

#[async_trait]
impl CommandHandler for WeatherHandler {
    fn name(&self) -> &str {
        "weather"
    }

    #[instrument(skip(self, _message))]
    async fn execute(&self, _message: &BotMessage, city: &str) -> Reply {
        if city.is_empty() {
            return Reply::reply(USAGE);
        }

        match self.provider.current_weather(city).await {
            Ok(report) => Reply::channel(Self::format_report(&report)),
            Err(e) => {
                error!("Weather lookup for {:?} failed: {}", city, e);
                Reply::reply(APOLOGY)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::providers::MockWeatherProvider;
    use crate::types::Delivery;
    use openweather_client::WeatherError;

    fn message() -> BotMessage {
        BotMessage {
            id: 1,
            channel_id: 2,
            author_id: 3,
            author_is_bot: false,
            text: "!weather London".into(),
            timestamp: 0,
        }
    }

    fn london() -> WeatherReport {
        WeatherReport {
            location: "London".into(),
            description: "light rain".into(),
            temperature: 55.4,
            humidity: 80.0,
            wind_speed: 12.5,
        }
    }

    #[tokio::test]
    async fn test_empty_city_sends_usage_without_request() {
        let mut provider = MockWeatherProvider::new();
        provider.expect_current_weather().never();

        let handler = WeatherHandler::new(Arc::new(provider));
        let reply = handler.execute(&message(), "").await;

        assert_eq!(reply, Reply::reply(USAGE));
    }

    #[tokio::test]
    async fn test_success_sends_report_to_channel() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_current_weather()
            .withf(|city| city == "London")
            .times(1)
            .returning(|_| Ok(london()));

        let handler = WeatherHandler::new(Arc::new(provider));
        let reply = handler.execute(&message(), "London").await;

        assert_eq!(reply.delivery, Delivery::Channel);
        assert_eq!(
            reply.text,
            "🌍 **Weather in London**:\n\
             ☁️ Description: light rain\n\
             🌡️ Temperature: 55.4°F\n\
             💧 Humidity: 80%\n\
             🌬️ Wind Speed: 12.5 mph"
        );
    }

    #[tokio::test]
    async fn test_failure_hides_error_detail() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_current_weather()
            .returning(|city| Err(AppError::Weather(WeatherError::NotFound(city.to_string()))));

        let handler = WeatherHandler::new(Arc::new(provider));
        let reply = handler.execute(&message(), "Nowhereville").await;

        assert_eq!(reply, Reply::reply(APOLOGY));
        assert!(!reply.text.contains("Nowhereville"));
        assert!(!reply.text.contains("not found"));
    }

    #[test]
    fn test_format_report_integral_values() {
        let report = WeatherReport {
            location: "Reykjavík".into(),
            description: "snow".into(),
            temperature: 28.0,
            humidity: 93.0,
            wind_speed: 20.0,
        };
        let text = WeatherHandler::format_report(&report);

        assert!(text.contains("Weather in Reykjavík"));
        assert!(text.contains("Temperature: 28°F"));
        assert!(text.contains("Humidity: 93%"));
        assert!(text.contains("Wind Speed: 20 mph"));
    }
}
