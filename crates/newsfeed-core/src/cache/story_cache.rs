//! Time-boxed cache for the aggregated story list
//!
//! Holds a single slot keyed by [`NEWEST_STORIES_KEY`]. Refresh is lazy: the
//! first request after expiry pays for the upstream fetch. Concurrent misses
//! are coalesced so only one fetch runs per expiry window.

use crate::error::{NewsError, Result};
use crate::hn::StorySource;
use crate::models::Story;
use moka::future::Cache;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Cache key for the newest stories slot
pub const NEWEST_STORIES_KEY: &str = "newestStories";

/// Default freshness window (3 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_secs(180);

/// Shared, immutable story list handed to every reader
pub type StoryList = Arc<Vec<Story>>;

/// Single-slot, single-flight story cache in front of a [`StorySource`]
pub struct StoryCache<S> {
    source: S,
    slot: Cache<&'static str, StoryList>,
    ttl: Duration,
}

impl<S: StorySource> StoryCache<S> {
    pub fn new(source: S, ttl: Duration) -> Self {
        let slot = Cache::builder().time_to_live(ttl).build();

        Self { source, slot, ttl }
    }

    pub fn with_default_ttl(source: S) -> Self {
        Self::new(source, DEFAULT_TTL)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current story list, fetching from the source when the slot is empty or expired
    ///
    /// A failed fetch stores nothing, so the next call retries.
    pub async fn get_stories(&self) -> Result<StoryList> {
        if let Some(stories) = self.slot.get(&NEWEST_STORIES_KEY).await {
            debug!(count = stories.len(), "Story cache hit");
            return Ok(stories);
        }

        self.slot
            .try_get_with(NEWEST_STORIES_KEY, async {
                let start = Instant::now();
                let stories = self.source.fetch().await?;
                info!(
                    count = stories.len(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    ttl_secs = self.ttl.as_secs(),
                    "Story cache refreshed"
                );
                Ok::<_, NewsError>(Arc::new(stories))
            })
            .await
            .map_err(|e: Arc<NewsError>| {
                warn!(error = %e, "Story cache refresh failed");
                Arc::unwrap_or_clone(e)
            })
    }

    /// True if a fresh entry is held
    pub async fn is_cached(&self) -> bool {
        self.slot.get(&NEWEST_STORIES_KEY).await.is_some()
    }

    /// Drop the cached list so the next read refetches
    pub async fn invalidate(&self) {
        self.slot.invalidate(&NEWEST_STORIES_KEY).await;
        debug!("Story cache invalidated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Source double that counts fetches and can be switched into failure
    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
        failing: AtomicBool,
        delay: Duration,
    }

    impl StorySource for CountingSource {
        async fn fetch(&self) -> Result<Vec<Story>> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.failing.load(Ordering::SeqCst) {
                return Err(NewsError::Status {
                    url: "http://upstream/v0/newstories.json".to_string(),
                    status: 503,
                });
            }
            Ok(vec![Story::new(format!("Fetch {n}"), None)])
        }
    }

    fn calls(cache: &StoryCache<Arc<CountingSource>>) -> usize {
        cache.source().calls.load(Ordering::SeqCst)
    }

    #[tokio::test]
    async fn test_hit_within_window_skips_source() {
        let cache = StoryCache::with_default_ttl(Arc::new(CountingSource::default()));

        let first = cache.get_stories().await.unwrap();
        let second = cache.get_stories().await.unwrap();

        assert_eq!(calls(&cache), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second[0].title, "Fetch 1");
    }

    #[tokio::test]
    async fn test_expired_entry_refetches() {
        let cache = StoryCache::new(
            Arc::new(CountingSource::default()),
            Duration::from_millis(50),
        );

        cache.get_stories().await.unwrap();
        tokio::time::sleep(Duration::from_millis(120)).await;
        let refreshed = cache.get_stories().await.unwrap();

        assert_eq!(calls(&cache), 2);
        assert_eq!(refreshed[0].title, "Fetch 2");
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let source = Arc::new(CountingSource::default());
        source.failing.store(true, Ordering::SeqCst);
        let cache = StoryCache::with_default_ttl(source.clone());

        let err = cache.get_stories().await.unwrap_err();
        assert!(err.is_network());
        assert!(!cache.is_cached().await);

        source.failing.store(false, Ordering::SeqCst);
        let stories = cache.get_stories().await.unwrap();

        assert_eq!(calls(&cache), 2);
        assert_eq!(stories[0].title, "Fetch 2");
        assert!(cache.is_cached().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_misses_share_one_fetch() {
        let source = Arc::new(CountingSource {
            delay: Duration::from_millis(100),
            ..Default::default()
        });
        let cache = Arc::new(StoryCache::with_default_ttl(source));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            handles.push(tokio::spawn(async move { cache.get_stories().await }));
        }

        for handle in handles {
            let stories = handle.await.unwrap().unwrap();
            assert_eq!(stories[0].title, "Fetch 1");
        }
        assert_eq!(calls(&cache), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache = StoryCache::with_default_ttl(Arc::new(CountingSource::default()));

        cache.get_stories().await.unwrap();
        cache.invalidate().await;
        assert!(!cache.is_cached().await);

        let stories = cache.get_stories().await.unwrap();
        assert_eq!(calls(&cache), 2);
        assert_eq!(stories[0].title, "Fetch 2");
    }
}
