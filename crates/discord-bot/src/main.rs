//! Discord Utility Bot - Main entry point.

use anyhow::Context;
use discord_bot::commands::Dispatcher;
use discord_bot::config::Config;
use discord_bot::discord;
use discord_bot::error::AppResult;
use giphy_client::GiphyClient;
use openai_client::OpenAiClient;
use openweather_client::OpenWeatherClient;
use secrecy::ExposeSecret;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log_level);

    info!("Starting Discord Utility Bot...");

    for name in config.missing_secrets() {
        warn!("{} is not set", name);
    }

    match config.http_timeout {
        Some(timeout) => info!("Outbound request timeout: {:?}", timeout),
        None => info!("Outbound request timeout: none"),
    }

    // Initialize clients
    let weather = OpenWeatherClient::new(
        config.openweather_api_key.expose_secret().as_str(),
        &config.openweather_base_url,
        config.http_timeout,
    )
    .context("Failed to create OpenWeather client")?;

    let completions = OpenAiClient::new(
        config.openai_api_key.expose_secret().as_str(),
        &config.openai_base_url,
        &config.openai_model,
        config.http_timeout,
    )
    .context("Failed to create OpenAI client")?;

    let gifs = GiphyClient::new(
        config.giphy_api_key.expose_secret().as_str(),
        &config.giphy_base_url,
        config.http_timeout,
    )
    .context("Failed to create Giphy client")?;

    info!("Completion model: {}", completions.model());

    let dispatcher = Arc::new(Dispatcher::new(
        Arc::new(weather),
        Arc::new(completions),
        Arc::new(gifs),
    ));

    let mut client = discord::build_client(config.discord_token.expose_secret(), dispatcher)
        .await
        .context("Failed to create Discord client")?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            shard_manager.shutdown_all().await;
        }
    });

    info!("Listening for messages...");
    client.start().await?;

    info!("Shutting down...");
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
