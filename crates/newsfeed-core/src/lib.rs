//! newsfeed-core - Core library for newsfeed
//!
//! Provides the story model, Hacker News client, TTL cache, and read views.

pub mod cache;
pub mod error;
pub mod hn;
pub mod models;
pub mod store;
pub mod views;

pub use cache::{StoryCache, StoryList};
pub use error::NewsError;
pub use hn::{HackerNewsClient, StorySource};
pub use models::Story;
pub use store::{FeedHealth, NewsStore, NewsStoreConfig};
pub use views::PageRequest;
