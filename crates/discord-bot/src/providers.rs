//! Provider capabilities used by the command handlers.
//!
//! Each third-party API sits behind one narrow trait so handlers can be
//! exercised with substitutes instead of the network.

use crate::error::AppResult;
use async_trait::async_trait;
use giphy_client::{Gif, GiphyClient, SearchQuery};
use openai_client::{ChatOptions, Message, OpenAiClient};
use openweather_client::{OpenWeatherClient, WeatherReport};

/// Current-weather lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, city: &str) -> AppResult<WeatherReport>;
}

/// Chat completion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns the first completion's text.
    async fn complete(&self, messages: Vec<Message>, options: &ChatOptions) -> AppResult<String>;
}

/// Gif search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GifProvider: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> AppResult<Vec<Gif>>;
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> AppResult<WeatherReport> {
        Ok(OpenWeatherClient::current_weather(self, city).await?)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(&self, messages: Vec<Message>, options: &ChatOptions) -> AppResult<String> {
        Ok(self.chat(messages, options).await?)
    }
}

#[async_trait]
impl GifProvider for GiphyClient {
    async fn search(&self, query: &SearchQuery) -> AppResult<Vec<Gif>> {
        Ok(GiphyClient::search(self, query).await?)
    }
}
