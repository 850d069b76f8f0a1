//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    #[error("Weather error: {0}")]
    Weather(#[from] openweather_client::WeatherError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] openai_client::OpenAiError),

    #[error("Giphy error: {0}")]
    Giphy(#[from] giphy_client::GiphyError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
