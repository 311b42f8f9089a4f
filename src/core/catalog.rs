//! # Catalog
//!
//! The in-memory data layer: a deterministic list of generated books and the
//! fixed-size page slicing that stands in for a paginated backend.
//!
//! ```text
//! page 1 → books[0..10]
//! page 2 → books[10..20]
//! ...
//! page 10 → books[90..100]   has_more = false, nothing left behind it
//! ```

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::book::Book;

pub const DEFAULT_CATALOG_SIZE: usize = 100;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page worth of books as returned by a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 1-based page number.
    pub number: usize,
    pub books: Vec<Book>,
    /// False once no records remain past this page.
    pub has_more: bool,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Generate `size` books. Record `i` (1-based) gets title `Book Title {i}`,
    /// author `Author {i}` and a publish date of January 1st, 202{(i-1) % 10}.
    pub fn generate(size: usize) -> Self {
        let books = (1..=size)
            .map(|i| {
                let year = 2020 + ((i - 1) % 10) as i32;
                let publish_date = NaiveDate::from_ymd_opt(year, 1, 1)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                Book {
                    id: i as u32,
                    title: format!("Book Title {i}"),
                    author: format!("Author {i}"),
                    description: Some(format!("This is the description for Book Title {i}")),
                    publish_date,
                }
            })
            .collect();
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: u32) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Slice `[(page-1)*page_size, page*page_size)` out of the catalog.
    ///
    /// `has_more` is false when the page comes back short or reaches the end
    /// of the catalog. Pages past the end come back empty. Page 0 is treated
    /// as page 1 and a zero page size as 1.
    pub fn page(&self, page: usize, page_size: usize) -> Page {
        let number = page.max(1);
        let page_size = page_size.max(1);
        let start = (number - 1).saturating_mul(page_size).min(self.books.len());
        let end = start.saturating_add(page_size).min(self.books.len());
        let books = self.books[start..end].to_vec();
        let has_more = books.len() == page_size && end < self.books.len();
        Page {
            number,
            books,
            has_more,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::generate(DEFAULT_CATALOG_SIZE)
    }
}
