//! OpenAI-compatible chat completions client.

mod client;
mod error;
mod types;

pub use client::OpenAiClient;
pub use error::OpenAiError;
pub use types::*;
