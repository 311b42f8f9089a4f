//! # Book Sources
//!
//! The async boundary between the list screen and wherever pages come from.
//! Today that is only `MockSource` over the generated catalog; a networked
//! backend would implement the same trait.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::core::catalog::{Catalog, Page};

/// Errors that can occur while fetching a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The source could not produce the page.
    Source(String),
    /// The fetch was aborted before it finished.
    Cancelled,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Source(msg) => write!(f, "source error: {msg}"),
            FetchError::Cancelled => write!(f, "fetch cancelled"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait BookSource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// Fetch a 1-based page.
    async fn fetch_page(&self, page: usize) -> Result<Page, FetchError>;
}

/// Serves pages out of an in-memory catalog.
pub struct MockSource {
    catalog: Catalog,
    page_size: usize,
    latency: Duration,
}

impl MockSource {
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        Self {
            catalog,
            page_size: page_size.max(1),
            latency: Duration::ZERO,
        }
    }

    /// Delay every fetch by `latency` to make the loading states visible.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

#[async_trait]
impl BookSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_page(&self, page: usize) -> Result<Page, FetchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let page = self.catalog.page(page, self.page_size);
        debug!(
            "mock source served page {} ({} books, has_more={})",
            page.number,
            page.books.len(),
            page.has_more
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::DEFAULT_PAGE_SIZE;
    use std::task::Poll;

    #[tokio::test]
    async fn test_mock_source_serves_catalog_pages() {
        let source = MockSource::new(Catalog::default(), DEFAULT_PAGE_SIZE);
        let page = source.fetch_page(3).await.unwrap();
        assert_eq!(page.number, 3);
        assert_eq!(page.books.first().map(|b| b.id), Some(21));
        assert_eq!(page.books.len(), 10);
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn test_mock_source_never_fails_past_the_end() {
        let source = MockSource::new(Catalog::default(), DEFAULT_PAGE_SIZE);
        let page = source.fetch_page(50).await.unwrap();
        assert!(page.books.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_zero_latency_fetch_is_ready_on_first_poll() {
        let source = MockSource::new(Catalog::generate(5), DEFAULT_PAGE_SIZE);
        let mut fetch = tokio_test::task::spawn(source.fetch_page(1));
        match fetch.poll() {
            Poll::Ready(Ok(page)) => assert_eq!(page.books.len(), 5),
            other => panic!("expected ready page, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_delays_the_page() {
        let source =
            MockSource::new(Catalog::generate(5), DEFAULT_PAGE_SIZE).with_latency(Duration::from_millis(250));
        let start = tokio::time::Instant::now();
        let page = source.fetch_page(1).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(250));
        assert_eq!(page.books.len(), 5);
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::Cancelled.to_string(), "fetch cancelled");
        assert_eq!(
            FetchError::Source("boom".to_string()).to_string(),
            "source error: boom"
        );
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let source = MockSource::new(Catalog::generate(5), 0);
        assert_eq!(source.page_size(), 1);
    }
}
