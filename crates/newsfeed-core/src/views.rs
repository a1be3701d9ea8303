//! Read views over the cached story list
//!
//! Both views are pure: they never touch the cache and preserve upstream order.

use crate::error::{NewsError, Result};
use crate::models::Story;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Validated 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Build a page request, rejecting `page < 1` or `page_size < 1`
    ///
    /// # Examples
    ///
    /// ```
    /// use newsfeed_core::views::PageRequest;
    ///
    /// let req = PageRequest::new(2, 10).unwrap();
    /// assert_eq!(req.offset(), 10);
    /// assert!(PageRequest::new(0, 10).is_err());
    /// assert!(PageRequest::new(1, -5).is_err());
    /// ```
    pub fn new(page: i64, page_size: i64) -> Result<Self> {
        if page < 1 {
            return Err(NewsError::invalid_input(format!(
                "page must be >= 1 (got {page})"
            )));
        }
        if page_size < 1 {
            return Err(NewsError::invalid_input(format!(
                "pageSize must be >= 1 (got {page_size})"
            )));
        }

        Ok(Self {
            page: usize::try_from(page).unwrap_or(usize::MAX),
            page_size: usize::try_from(page_size).unwrap_or(usize::MAX),
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first story on this page (saturates instead of overflowing)
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE as usize,
            page_size: DEFAULT_PAGE_SIZE as usize,
        }
    }
}

/// Stories on the requested page; empty once the offset passes the end
pub fn paginate(stories: &[Story], request: PageRequest) -> Vec<Story> {
    stories
        .iter()
        .skip(request.offset())
        .take(request.page_size)
        .cloned()
        .collect()
}

/// Stories whose title contains `query`, ignoring case
pub fn search(stories: &[Story], query: &str) -> Vec<Story> {
    let needle = query.to_lowercase();
    stories
        .iter()
        .filter(|s| s.title_contains(&needle))
        .cloned()
        .collect()
}
