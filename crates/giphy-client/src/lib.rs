//! Giphy gif search client.

mod client;
mod error;
mod types;

pub use client::GiphyClient;
pub use error::GiphyError;
pub use types::*;
