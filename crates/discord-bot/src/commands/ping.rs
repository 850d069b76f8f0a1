//! Ping command - reports message round-trip latency.

use crate::commands::CommandHandler;
use crate::types::{BotMessage, Reply};
use async_trait::async_trait;

pub struct PingHandler;

impl PingHandler {
    pub fn new() -> Self {
        Self
    }

    /// Milliseconds from `created_ms` to `now_ms`, never negative.
    pub fn latency_ms(created_ms: i64, now_ms: i64) -> i64 {
        now_ms.saturating_sub(created_ms).max(0)
    }
}

impl Default for PingHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for PingHandler {
    fn name(&self) -> &str {
        "ping"
    }

    async fn execute(&self, message: &BotMessage, _args: &str) -> Reply {
        let now = chrono::Utc::now().timestamp_millis();
        let latency = Self::latency_ms(message.timestamp, now);
        Reply::reply(format!("🏓 Pong! Latency: {}ms", latency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Delivery;

    fn message_at(timestamp: i64) -> BotMessage {
        BotMessage {
            id: 1,
            channel_id: 2,
            author_id: 3,
            author_is_bot: false,
            text: "!ping".into(),
            timestamp,
        }
    }

    fn parse_latency(text: &str) -> i64 {
        text.trim_start_matches("🏓 Pong! Latency: ")
            .trim_end_matches("ms")
            .parse()
            .unwrap()
    }

    #[test]
    fn test_latency_ms() {
        assert_eq!(PingHandler::latency_ms(1_000, 1_250), 250);
        assert_eq!(PingHandler::latency_ms(1_000, 1_000), 0);
        // Clock skew never produces a negative report.
        assert_eq!(PingHandler::latency_ms(2_000, 1_000), 0);
    }

    #[tokio::test]
    async fn test_ping_replies_with_latency() {
        let created = chrono::Utc::now().timestamp_millis() - 40;
        let reply = PingHandler::new().execute(&message_at(created), "").await;

        assert_eq!(reply.delivery, Delivery::Reply);
        assert!(reply.text.starts_with("🏓 Pong! Latency: "));
        let latency = parse_latency(&reply.text);
        assert!(latency >= 40, "latency {} below elapsed time", latency);
        assert!(latency < 40 + 5_000);
    }

    #[tokio::test]
    async fn test_ping_future_timestamp_reports_zero() {
        let created = chrono::Utc::now().timestamp_millis() + 60_000;
        let reply = PingHandler::new().execute(&message_at(created), "").await;
        assert_eq!(reply.text, "🏓 Pong! Latency: 0ms");
    }
}
