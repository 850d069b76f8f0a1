//! Common test utilities for integration tests.

use discord_bot::commands::Dispatcher;
use discord_bot::types::BotMessage;
use giphy_client::GiphyClient;
use openai_client::OpenAiClient;
use openweather_client::OpenWeatherClient;
use std::sync::Arc;
use wiremock::MockServer;

/// One mock server per provider.
pub struct MockProviders {
    pub weather: MockServer,
    pub openai: MockServer,
    pub giphy: MockServer,
}

impl MockProviders {
    pub async fn start() -> Self {
        Self {
            weather: MockServer::start().await,
            openai: MockServer::start().await,
            giphy: MockServer::start().await,
        }
    }

    /// Dispatcher wired to real clients pointed at the mock servers.
    pub fn dispatcher(&self) -> Dispatcher {
        let weather = OpenWeatherClient::new("weather-key", self.weather.uri(), None).unwrap();
        let openai = OpenAiClient::new("openai-key", self.openai.uri(), "test-model", None).unwrap();
        let giphy = GiphyClient::new("giphy-key", self.giphy.uri(), None).unwrap();

        Dispatcher::new(Arc::new(weather), Arc::new(openai), Arc::new(giphy))
    }
}

/// A human-authored message created just now.
pub fn user_message(text: &str) -> BotMessage {
    BotMessage {
        id: 1_100_000_000_000_000_000,
        channel_id: 42,
        author_id: 7,
        author_is_bot: false,
        text: text.to_string(),
        timestamp: chrono::Utc::now().timestamp_millis(),
    }
}
