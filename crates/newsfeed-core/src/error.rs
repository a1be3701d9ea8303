//! Error types for newsfeed-core
//!
//! Errors propagate unchanged from the upstream client through the cache to
//! the read API. The enum is `Clone` because the cache hands one fetch error
//! to every caller waiting on the same in-flight load.

use thiserror::Error;

/// Core error type for newsfeed operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NewsError {
    // ===================
    // Network Errors
    // ===================
    #[error("Upstream request failed: {url}: {message}")]
    Network { url: String, message: String },

    #[error("Upstream returned HTTP {status}: {url}")]
    Status { url: String, status: u16 },

    // ===================
    // Parse Errors
    // ===================
    #[error("Failed to parse upstream response from {url}: {message}")]
    Parse { url: String, message: String },

    // ===================
    // Input Errors
    // ===================
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl NewsError {
    pub fn network(url: impl Into<String>, source: &reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            message: source.to_string(),
        }
    }

    pub fn parse(url: impl Into<String>, source: &serde_json::Error) -> Self {
        Self::Parse {
            url: url.into(),
            message: source.to_string(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// True for failures reaching the upstream (transport or non-success status)
    pub fn is_network(&self) -> bool {
        matches!(self, NewsError::Network { .. } | NewsError::Status { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, NewsError::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, NewsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_classification() {
        let status = NewsError::Status {
            url: "http://upstream/v0/newstories.json".to_string(),
            status: 503,
        };
        assert!(status.is_network());
        assert!(!status.is_parse());

        let parse = NewsError::Parse {
            url: "http://upstream/v0/item/1.json".to_string(),
            message: "expected value".to_string(),
        };
        assert!(parse.is_parse());
        assert!(!parse.is_network());

        assert!(!NewsError::invalid_input("page must be >= 1").is_network());
    }

    #[test]
    fn test_display_includes_context() {
        let err = NewsError::Status {
            url: "http://upstream/v0/item/7.json".to_string(),
            status: 404,
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("/v0/item/7.json"));
    }

    #[test]
    fn test_parse_constructor_keeps_serde_message() {
        let source = serde_json::from_str::<Vec<u64>>("not json").unwrap_err();
        let err = NewsError::parse("http://upstream/v0/newstories.json", &source);
        match err {
            NewsError::Parse { url, message } => {
                assert!(url.ends_with("newstories.json"));
                assert!(!message.is_empty());
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
