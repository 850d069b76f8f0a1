//! Bot command parsing, dispatch and handlers.

mod ask;
mod gif;
mod ping;
mod weather;

pub use ask::AskHandler;
pub use gif::GifHandler;
pub use ping::PingHandler;
pub use weather::WeatherHandler;

use crate::providers::{CompletionProvider, GifProvider, WeatherProvider};
use crate::types::{BotMessage, Reply};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument};

const PING: &str = "!ping";
const WEATHER: &str = "!weather";
const ASK: &str = "!ask";
const GIF: &str = "!gif";

/// A recognised command and its argument text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ping,
    Weather { city: String },
    Ask { question: String },
    Gif { query: String },
}

impl Command {
    /// Classify message text.
    ///
    /// `!ping` must be the whole message. The other commands must be the
    /// first whitespace-delimited token; the rest of the text, trimmed, is
    /// the argument (possibly empty). A command glued to more text
    /// (`!weatherLondon`, `!gifs cats`) is not recognised.
    pub fn parse(text: &str) -> Option<Self> {
        if text == PING {
            return Some(Command::Ping);
        }

        let (token, rest) = split_leading_token(text);
        match token {
            WEATHER => Some(Command::Weather { city: rest.into() }),
            ASK => Some(Command::Ask { question: rest.into() }),
            GIF => Some(Command::Gif { query: rest.into() }),
            _ => None,
        }
    }

    /// Argument text; empty for `Ping`.
    pub fn args(&self) -> &str {
        match self {
            Command::Ping => "",
            Command::Weather { city } => city,
            Command::Ask { question } => question,
            Command::Gif { query } => query,
        }
    }
}

fn split_leading_token(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim()),
        None => (text, ""),
    }
}

/// Command handler trait.
///
/// Handlers never fail: provider errors are logged and turned into a fixed
/// apology reply inside `execute`.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name (e.g., "ping", "weather").
    fn name(&self) -> &str;

    /// Execute the command with its already-extracted argument.
    async fn execute(&self, message: &BotMessage, args: &str) -> Reply;
}

/// Routes messages to at most one handler.
pub struct Dispatcher {
    ping: PingHandler,
    weather: WeatherHandler,
    ask: AskHandler,
    gif: GifHandler,
}

impl Dispatcher {
    pub fn new(
        weather: Arc<dyn WeatherProvider>,
        completions: Arc<dyn CompletionProvider>,
        gifs: Arc<dyn GifProvider>,
    ) -> Self {
        Self {
            ping: PingHandler::new(),
            weather: WeatherHandler::new(weather),
            ask: AskHandler::new(completions),
            gif: GifHandler::new(gifs),
        }
    }

    /// Handle one inbound message. `None` means the message is ignored:
    /// bot-authored or not a command.
    #[instrument(skip(self, message), fields(message_id = message.id, channel_id = message.channel_id))]
    pub async fn dispatch(&self, message: &BotMessage) -> Option<Reply> {
        if message.author_is_bot {
            return None;
        }

        let command = Command::parse(&message.text)?;
        let handler: &dyn CommandHandler = match command {
            Command::Ping => &self.ping,
            Command::Weather { .. } => &self.weather,
            Command::Ask { .. } => &self.ask,
            Command::Gif { .. } => &self.gif,
        };

        info!("Command !{} from {}", handler.name(), message.author_id);
        let reply = handler.execute(message, command.args()).await;
        debug!("Reply ({:?}): {} chars", reply.delivery, reply.text.len());
        Some(reply)
    }
}
