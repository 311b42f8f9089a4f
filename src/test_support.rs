//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::book::Book;
use crate::core::catalog::{Catalog, Page};
use crate::core::source::{BookSource, FetchError};

/// A source whose every fetch fails.
pub struct FailingSource;

#[async_trait]
impl BookSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch_page(&self, _page: usize) -> Result<Page, FetchError> {
        Err(FetchError::Source("backend unavailable".to_string()))
    }
}

/// The catalog's book with the given 1-based id.
pub fn sample_book(id: u32) -> Book {
    Catalog::generate(id as usize)
        .get(id)
        .cloned()
        .unwrap_or_else(|| panic!("no sample book {id}"))
}
