//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
///
/// Secrets default to empty so a missing key only surfaces as an
/// authentication failure from the matching provider at call time.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Discord bot token
    #[serde(default = "empty_secret")]
    pub discord_token: SecretString,

    /// OpenWeather API key
    #[serde(default = "empty_secret")]
    pub openweather_api_key: SecretString,

    /// OpenAI API key
    #[serde(default = "empty_secret")]
    pub openai_api_key: SecretString,

    /// Giphy API key
    #[serde(default = "empty_secret")]
    pub giphy_api_key: SecretString,

    #[serde(default = "default_openweather_url")]
    pub openweather_base_url: String,

    #[serde(default = "default_openai_url")]
    pub openai_base_url: String,

    /// Completion model
    #[serde(default = "default_model")]
    pub openai_model: String,

    #[serde(default = "default_giphy_url")]
    pub giphy_base_url: String,

    /// Outbound request timeout. Unset means no overall timeout.
    #[serde(default, with = "humantime_serde")]
    pub http_timeout: Option<Duration>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_openweather_url() -> String {
    "https://api.openweathermap.org".into()
}

fn default_openai_url() -> String {
    "https://api.openai.com/v1".into()
}

fn default_model() -> String {
    "gpt-3.5-turbo".into()
}

fn default_giphy_url() -> String {
    "https://api.giphy.com".into()
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::default())
    }

    /// Build configuration from an explicit environment source.
    pub fn from_environment(environment: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(
                environment
                    .separator("__")
                    // API keys and tokens must stay strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Names of the secrets that are unset or empty.
    pub fn missing_secrets(&self) -> Vec<&'static str> {
        [
            ("DISCORD_TOKEN", &self.discord_token),
            ("OPENWEATHER_API_KEY", &self.openweather_api_key),
            ("OPENAI_API_KEY", &self.openai_api_key),
            ("GIPHY_API_KEY", &self.giphy_api_key),
        ]
        .into_iter()
        .filter(|(_, secret)| secret.expose_secret().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_environment(config::Environment::default().source(Some(map))).unwrap()
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = load_from(&[]);

        assert_eq!(config.openweather_base_url, "https://api.openweathermap.org");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.openai_model, "gpt-3.5-turbo");
        assert_eq!(config.giphy_base_url, "https://api.giphy.com");
        assert_eq!(config.http_timeout, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.missing_secrets(),
            vec![
                "DISCORD_TOKEN",
                "OPENWEATHER_API_KEY",
                "OPENAI_API_KEY",
                "GIPHY_API_KEY"
            ]
        );
    }

    #[test]
    fn test_reads_secrets_and_overrides() {
        let config = load_from(&[
            ("DISCORD_TOKEN", "discord-token"),
            ("OPENWEATHER_API_KEY", "12345"),
            ("OPENAI_API_KEY", "sk-test"),
            ("GIPHY_API_KEY", "giphy-key"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("HTTP_TIMEOUT", "10s"),
            ("LOG_LEVEL", "debug"),
        ]);

        assert_eq!(config.discord_token.expose_secret(), "discord-token");
        // Numeric-looking keys are not coerced.
        assert_eq!(config.openweather_api_key.expose_secret(), "12345");
        assert_eq!(config.openai_api_key.expose_secret(), "sk-test");
        assert_eq!(config.giphy_api_key.expose_secret(), "giphy-key");
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.http_timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.log_level, "debug");
        assert!(config.missing_secrets().is_empty());
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let config = load_from(&[("OPENAI_API_KEY", "sk-very-secret")]);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-very-secret"));
    }
}
