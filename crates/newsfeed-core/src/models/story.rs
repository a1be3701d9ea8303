//! Story model decoded from the Hacker News item endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single news item
///
/// Only `title` and `url` drive behavior. The remaining upstream fields are
/// captured for display and are optional because deleted or dead items omit them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Upstream item id
    #[serde(default)]
    pub id: u64,

    /// Display title (empty for deleted items)
    #[serde(default)]
    pub title: String,

    /// Link to the story content (absent for text posts)
    #[serde(default)]
    pub url: Option<String>,

    /// Author username
    #[serde(default)]
    pub by: Option<String>,

    #[serde(default)]
    pub score: Option<i64>,

    /// Creation time (upstream sends unix seconds)
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub time: Option<DateTime<Utc>>,
}

impl Story {
    pub fn new(title: impl Into<String>, url: Option<&str>) -> Self {
        Self {
            title: title.into(),
            url: url.map(str::to_string),
            ..Default::default()
        }
    }

    /// Case-insensitive substring match on the title
    ///
    /// An empty needle matches every story.
    pub fn title_contains(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.title.to_lowercase().contains(needle_lower)
    }
}
