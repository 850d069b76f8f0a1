//! OpenWeather current-weather client.

mod client;
mod error;
mod types;

pub use client::OpenWeatherClient;
pub use error::WeatherError;
pub use types::*;
