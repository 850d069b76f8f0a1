//! Discord utility bot: relays `!ping`, `!weather`, `!ask` and `!gif`
//! commands to third-party HTTP APIs.

pub mod commands;
pub mod config;
pub mod discord;
pub mod error;
pub mod providers;
pub mod types;
