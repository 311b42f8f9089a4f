//! # Navigation
//!
//! Two routes and a stack. The root is always `BookList`; `BookDetails`
//! carries the id of the book it was opened for.
//!
//! ```text
//! [BookList]  --push(BookDetails{42})-->  [BookList, BookDetails{42}]
//!             <--------- pop -----------
//! ```

use std::fmt;

use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    BookList,
    BookDetails {
        book_id: u32,
    },
}

impl Route {
    /// Route name as used by the navigator and the title bar.
    pub fn name(&self) -> &'static str {
        match self {
            Route::BookList => "BookList",
            Route::BookDetails { .. } => "BookDetails",
        }
    }

    pub fn book_id(&self) -> Option<u32> {
        match self {
            Route::BookList => None,
            Route::BookDetails { book_id } => Some(*book_id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::BookList => write!(f, "BookList"),
            Route::BookDetails { book_id } => write!(f, "BookDetails({book_id})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::BookList],
        }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn push(&mut self, route: Route) {
        if route == Route::BookList {
            // BookList is the root; pushing it again would just duplicate it.
            warn!("Ignoring push of root route");
            return;
        }
        info!("Navigate: {} -> {}", self.current(), route);
        self.stack.push(route);
    }

    /// Pop the top route. The root is never popped; returns the removed route.
    pub fn pop(&mut self) -> Option<Route> {
        if !self.can_go_back() {
            return None;
        }
        let popped = self.stack.pop();
        info!("Navigate back: {} <- {:?}", self.current(), popped);
        popped
    }
}
