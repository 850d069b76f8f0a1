//! Gif command - random pick from a Giphy search.

use crate::commands::CommandHandler;
use crate::providers::GifProvider;
use crate::types::{BotMessage, Reply};
use async_trait::async_trait;
use giphy_client::{Gif, SearchQuery};
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::{error, info, instrument};

pub const USAGE: &str = "❓ Please enter a search term. Example: `!gif cats`";
pub const NO_RESULTS: &str = "❌ No GIFs found for that search term.";
pub const APOLOGY: &str = "❌ Could not fetch GIFs. Please try again later.";

pub struct GifHandler {
    provider: Arc<dyn GifProvider>,
}

impl GifHandler {
    pub fn new(provider: Arc<dyn GifProvider>) -> Self {
        Self { provider }
    }

    /// Uniformly random URL among hits that have one, `None` when there are none.
    pub fn pick_url(gifs: &[Gif]) -> Option<String> {
        let usable: Vec<&Gif> = gifs.iter().filter(|g| !g.url.is_empty()).collect();
        usable.choose(&mut rand::thread_rng()).map(|g| g.url.clone())
    }
}

#[async_trait]
impl CommandHandler for GifHandler {
    fn name(&self) -> &str {
        "gif"
    }

    #[instrument(skip(self, _message))]
    async fn execute(&self, _message: &BotMessage, query: &str) -> Reply {
        if query.is_empty() {
            return Reply::reply(USAGE);
        }

        let gifs = match self.provider.search(&SearchQuery::new(query)).await {
            Ok(gifs) => gifs,
            Err(e) => {
                error!("Gif search failed: {}", e);
                return Reply::reply(APOLOGY);
            }
        };

        info!("Total gif results: {}", gifs.len());

        match Self::pick_url(&gifs) {
            Some(url) => Reply::channel(url),
            None => Reply::reply(NO_RESULTS),
        }
    }
}
