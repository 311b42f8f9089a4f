//! # Pager
//!
//! List screen pagination state: the current page number and whether the
//! source has more to give. The pager only decides *which* page to fetch;
//! the fetch itself happens in the adapter.

use log::debug;

use crate::core::catalog::Page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    has_more: bool,
    /// Page we came from while an advance is still unconfirmed.
    pending_from: Option<usize>,
    /// Whether any page has been recorded yet.
    loaded: bool,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}

impl Pager {
    pub fn new() -> Self {
        Self {
            page: 1,
            has_more: true,
            pending_from: None,
            loaded: false,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }

    /// True once a fetched page has been recorded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Record a fetched page. Stale pages (not the current one) are ignored
    /// and `false` is returned.
    pub fn record(&mut self, page: &Page) -> bool {
        if page.number != self.page {
            debug!(
                "Ignoring page {} while on page {}",
                page.number, self.page
            );
            return false;
        }
        if !page.has_more {
            self.has_more = false;
        }
        self.pending_from = None;
        self.loaded = true;
        true
    }

    /// Undo an advance whose page never arrived. No-op otherwise.
    pub fn rollback(&mut self) {
        if let Some(previous) = self.pending_from.take() {
            debug!("Rolling back from page {} to {}", self.page, previous);
            self.page = previous;
        }
    }

    /// Move to the next page if there is one, nothing is loading and the
    /// current page has actually been shown. Returns the new page number.
    pub fn advance(&mut self, is_loading: bool) -> Option<usize> {
        if !self.has_more || is_loading || !self.loaded {
            return None;
        }
        self.pending_from = Some(self.page);
        self.page += 1;
        debug!("Advancing to page {}", self.page);
        Some(self.page)
    }
}
