//! Discord gateway adapter built on serenity.

use crate::commands::Dispatcher;
use crate::error::AppResult;
use crate::types::{BotMessage, Delivery};
use async_trait::async_trait;
use serenity::all::{Client, Context, EventHandler, GatewayIntents, Message, Ready};
use std::sync::Arc;
use tracing::{error, info};

/// Discord epoch (2015-01-01T00:00:00Z) in unix milliseconds.
const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// Intents needed to read guild message text.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
}

/// Creation time encoded in a snowflake id, in unix milliseconds.
pub fn snowflake_timestamp_ms(id: u64) -> i64 {
    ((id >> 22) + DISCORD_EPOCH_MS) as i64
}

/// Convert a serenity message into a [`BotMessage`].
pub fn to_bot_message(msg: &Message) -> BotMessage {
    BotMessage {
        id: msg.id.get(),
        channel_id: msg.channel_id.get(),
        author_id: msg.author.id.get(),
        author_is_bot: msg.author.bot,
        text: msg.content.clone(),
        timestamp: snowflake_timestamp_ms(msg.id.get()),
    }
}

/// serenity event handler that forwards messages to the dispatcher.
pub struct Handler {
    dispatcher: Arc<Dispatcher>,
}

impl Handler {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("✅ Logged in as {}", ready.user.tag());
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let message = to_bot_message(&msg);
        let Some(reply) = self.dispatcher.dispatch(&message).await else {
            return;
        };

        let sent = match reply.delivery {
            Delivery::Reply => msg.reply(&ctx, &reply.text).await,
            Delivery::Channel => msg.channel_id.say(&ctx.http, &reply.text).await,
        };

        if let Err(e) = sent {
            error!("Failed to send reply: {}", e);
        }
    }
}

/// Build a gateway client that routes messages through `dispatcher`.
pub async fn build_client(token: &str, dispatcher: Arc<Dispatcher>) -> AppResult<Client> {
    let client = Client::builder(token, intents())
        .event_handler(Handler::new(dispatcher))
        .await?;
    Ok(client)
}
