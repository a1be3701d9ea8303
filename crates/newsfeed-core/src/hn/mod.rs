//! Story sources
//!
//! The cache only knows about [`StorySource`]; the production source is the
//! Hacker News Firebase API client in [`client`].

pub mod client;

pub use client::{HackerNewsClient, HN_API_URL};

use crate::error::Result;
use crate::models::Story;
use std::future::Future;
use std::sync::Arc;

/// Produces a complete, ordered list of the newest stories
///
/// Implementations are all-or-nothing: either every story is returned or
/// the whole fetch fails.
pub trait StorySource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Story>>> + Send;
}

impl<T: StorySource> StorySource for Arc<T> {
    async fn fetch(&self) -> Result<Vec<Story>> {
        (**self).fetch().await
    }
}
