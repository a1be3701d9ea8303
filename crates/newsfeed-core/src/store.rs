//! News store: the read API over the cached story list
//!
//! Every read goes through the cache independently; there is no session or
//! cursor state between calls.

use crate::cache::{StoryCache, StoryList, DEFAULT_TTL};
use crate::error::Result;
use crate::hn::{HackerNewsClient, StorySource, HN_API_URL};
use crate::models::Story;
use crate::views::{self, PageRequest};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Configuration for the news store and its upstream client
#[derive(Debug, Clone)]
pub struct NewsStoreConfig {
    /// Upstream API base URL (without the `/v0` prefix)
    pub base_url: String,

    /// Maximum number of newest ids to resolve into stories
    pub story_limit: usize,

    /// Freshness window for the aggregated list
    pub cache_ttl: Duration,

    /// Maximum item requests in flight during one fetch
    pub max_concurrent_requests: usize,

    /// Per-request timeout for upstream calls
    pub request_timeout: Duration,
}

impl Default for NewsStoreConfig {
    fn default() -> Self {
        Self {
            base_url: HN_API_URL.to_string(),
            story_limit: 100,
            cache_ttl: DEFAULT_TTL,
            max_concurrent_requests: 100,
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Snapshot reported by the health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedHealth {
    /// A fresh story list is held
    pub cached: bool,
    pub ttl_secs: u64,
    pub story_limit: usize,
}

/// Central read API for newsfeed
///
/// Shared across request handlers as `Arc<NewsStore>`.
pub struct NewsStore<S = HackerNewsClient> {
    cache: StoryCache<S>,
    config: NewsStoreConfig,
}

impl NewsStore<HackerNewsClient> {
    /// Create a store backed by the Hacker News API
    pub fn new(config: NewsStoreConfig) -> Result<Self> {
        let client = HackerNewsClient::new(&config)?;
        Ok(Self::with_source(client, config))
    }

    /// Create with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(NewsStoreConfig::default())
    }
}

impl<S: StorySource> NewsStore<S> {
    /// Create a store over an arbitrary story source
    pub fn with_source(source: S, config: NewsStoreConfig) -> Self {
        let cache = StoryCache::new(source, config.cache_ttl);
        Self { cache, config }
    }

    pub fn config(&self) -> &NewsStoreConfig {
        &self.config
    }

    /// Full cached story list
    pub async fn stories(&self) -> Result<StoryList> {
        self.cache.get_stories().await
    }

    /// One page of the newest stories
    pub async fn latest(&self, request: PageRequest) -> Result<Vec<Story>> {
        let stories = self.cache.get_stories().await?;
        let page = views::paginate(&stories, request);
        debug!(
            page = request.page(),
            page_size = request.page_size(),
            returned = page.len(),
            "Served latest stories"
        );
        Ok(page)
    }

    /// Newest stories whose title contains `query` (case-insensitive)
    pub async fn search(&self, query: &str) -> Result<Vec<Story>> {
        let stories = self.cache.get_stories().await?;
        let matches = views::search(&stories, query);
        debug!(query, returned = matches.len(), "Served story search");
        Ok(matches)
    }

    /// Drop the cached list; the next read refetches from upstream
    pub async fn refresh(&self) {
        self.cache.invalidate().await;
    }

    pub async fn health(&self) -> FeedHealth {
        FeedHealth {
            cached: self.cache.is_cached().await,
            ttl_secs: self.cache.ttl().as_secs(),
            story_limit: self.config.story_limit,
        }
    }
}
