//! OpenWeather current-weather API types.

use crate::error::WeatherError;
use serde::Deserialize;

/// Raw `/data/2.5/weather` response. Only the fields the bot reports are
/// modelled; the rest of the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    pub weather: Vec<Condition>,
    pub main: MainReadings,
    pub wind: Wind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// Error body OpenWeather sends alongside non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Flattened weather readings for one location, in imperial units.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// Location name as resolved by the provider.
    pub location: String,
    /// Description of the first reported condition (e.g. "light rain").
    pub description: String,
    /// Temperature in °F.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Wind speed in mph.
    pub wind_speed: f64,
}

impl TryFrom<CurrentWeatherResponse> for WeatherReport {
    type Error = WeatherError;

    fn try_from(response: CurrentWeatherResponse) -> Result<Self, Self::Error> {
        let description = response
            .weather
            .into_iter()
            .next()
            .map(|c| c.description)
            .ok_or(WeatherError::MissingField("weather[0].description"))?;

        Ok(Self {
            location: response.name,
            description,
            temperature: response.main.temp,
            humidity: response.main.humidity,
            wind_speed: response.wind.speed,
        })
    }
}
