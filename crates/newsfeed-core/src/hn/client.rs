//! Hacker News API client
//!
//! Fetches the newest story ids, then every selected item concurrently.
//! Source: https://github.com/HackerNews/API

use super::StorySource;
use crate::error::{NewsError, Result};
use crate::models::Story;
use crate::store::NewsStoreConfig;
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Hacker News API base URL
pub const HN_API_URL: &str = "https://hacker-news.firebaseio.com";

/// Upstream client for the Hacker News Firebase API
#[derive(Debug, Clone)]
pub struct HackerNewsClient {
    http: reqwest::Client,
    base_url: String,
    story_limit: usize,
    max_concurrent_requests: usize,
}

impl HackerNewsClient {
    pub fn new(config: &NewsStoreConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("newsfeed/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NewsError::network(&config.base_url, &e))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            story_limit: config.story_limit,
            max_concurrent_requests: config.max_concurrent_requests.max(1),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ids of the newest stories, newest first
    pub async fn newest_ids(&self) -> Result<Vec<u64>> {
        let url = format!("{}/v0/newstories.json", self.base_url);
        self.get_json(&url).await
    }

    /// A single item by id
    ///
    /// The API answers `null` for ids that do not exist; that is a parse failure
    /// here since no story can be built from it.
    pub async fn item(&self, id: u64) -> Result<Story> {
        let url = format!("{}/v0/item/{}.json", self.base_url, id);
        let story: Option<Story> = self.get_json(&url).await?;
        story.ok_or_else(|| NewsError::Parse {
            url,
            message: "item body is null".to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| NewsError::network(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| NewsError::network(url, &e))?;

        serde_json::from_str(&body).map_err(|e| NewsError::parse(url, &e))
    }
}

impl StorySource for HackerNewsClient {
    async fn fetch(&self) -> Result<Vec<Story>> {
        let start = Instant::now();

        let ids = self.newest_ids().await?;
        let total = ids.len();
        let selected: Vec<u64> = ids.into_iter().take(self.story_limit).collect();

        debug!(
            available = total,
            selected = selected.len(),
            "Fetching newest story items"
        );

        // buffered() yields in submission order; try_collect stops at the first error
        let stories: Vec<Story> = stream::iter(selected)
            .map(|id| self.item(id))
            .buffered(self.max_concurrent_requests)
            .try_collect()
            .await
            .inspect_err(|e| warn!(error = %e, "Story fetch aborted"))?;

        info!(
            count = stories.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Fetched newest stories"
        );

        Ok(stories)
    }
}
