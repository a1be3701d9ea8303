//! Data models for newsfeed

pub mod story;

pub use story::Story;
