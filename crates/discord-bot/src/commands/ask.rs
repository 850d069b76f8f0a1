//! Ask command - short answers from a chat completion model.

use crate::commands::CommandHandler;
use crate::providers::CompletionProvider;
use crate::types::{BotMessage, Reply};
use async_trait::async_trait;
use openai_client::{ChatOptions, Message};
use std::sync::Arc;
use tracing::{error, instrument};

pub const USAGE: &str = "❓ Please ask a question. Example: `!ask What is the capital of France?`";
pub const APOLOGY: &str = "❌ Sorry, I couldn’t process that. Please try again later.";

const SYSTEM_PROMPT: &str =
    "Be concise. Limit responses to under 100 words unless specified otherwise.";
const MAX_TOKENS: u32 = 150;
const TEMPERATURE: f32 = 0.4;
const STOP_SEQUENCES: [&str; 2] = ["\n", "User:"];

pub struct AskHandler {
    provider: Arc<dyn CompletionProvider>,
}

impl AskHandler {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// System + user turns for a question.
    pub fn build_messages(question: &str) -> Vec<Message> {
        vec![Message::system(SYSTEM_PROMPT), Message::user(question)]
    }

    pub fn options() -> ChatOptions {
        ChatOptions {
            temperature: Some(TEMPERATURE),
            max_tokens: Some(MAX_TOKENS),
            stop: Some(STOP_SEQUENCES.iter().map(|s| s.to_string()).collect()),
        }
    }
}

#[async_trait]
impl CommandHandler for AskHandler {
    fn name(&self) -> &str {
        "ask"
    }

    #[instrument(skip(self, _message, question), fields(question_len = question.len()))]
    async fn execute(&self, _message: &BotMessage, question: &str) -> Reply {
        if question.is_empty() {
            return Reply::reply(USAGE);
        }

        match self
            .provider
            .complete(Self::build_messages(question), &Self::options())
            .await
        {
            Ok(answer) => Reply::reply(answer.trim()),
            Err(e) => {
                error!("Completion request failed: {}", e);
                Reply::reply(APOLOGY)
            }
        }
    }
}
