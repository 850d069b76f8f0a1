//! Platform-neutral message and reply types.

/// Parsed message for bot processing.
#[derive(Debug, Clone, PartialEq)]
pub struct BotMessage {
    /// Message id on the platform.
    pub id: u64,
    /// Channel the message was posted in.
    pub channel_id: u64,
    /// Author's user id.
    pub author_id: u64,
    /// Whether the author is a bot account (including this bot).
    pub author_is_bot: bool,
    /// The message text.
    pub text: String,
    /// Creation time in unix milliseconds.
    pub timestamp: i64,
}

/// How a reply is delivered back to the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Threaded reply to the triggering message.
    Reply,
    /// Plain message in the triggering message's channel.
    Channel,
}

/// Handler output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub delivery: Delivery,
    pub text: String,
}

impl Reply {
    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            delivery: Delivery::Reply,
            text: text.into(),
        }
    }

    pub fn channel(text: impl Into<String>) -> Self {
        Self {
            delivery: Delivery::Channel,
            text: text.into(),
        }
    }
}
