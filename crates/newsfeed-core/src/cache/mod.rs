//! Caching layer for newsfeed-core
//!
//! Provides the in-memory, TTL-bound story list cache.

pub mod story_cache;

pub use story_cache::{StoryCache, StoryList, DEFAULT_TTL, NEWEST_STORIES_KEY};
