//! # Application State
//!
//! Core business state for Folio. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! Store
//! └── state: Arc<BookState>
//!     ├── books: Vec<Book>            // current page
//!     ├── selected_book: Option<Book> // what the detail screen shows
//!     ├── is_loading: bool            // fetch in flight
//!     ├── error: Option<String>       // load failure message
//!     └── search_query: String        // list screen filter text
//! ```
//!
//! State changes only happen through `Store::dispatch(action)`, which runs
//! `reduce()` from action.rs and swaps in the new snapshot. Snapshots handed
//! out before a dispatch keep showing the old state.

use std::sync::Arc;

use log::debug;

use crate::core::action::{Action, reduce};
use crate::core::book::Book;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookState {
    pub books: Vec<Book>,
    pub selected_book: Option<Book>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub search_query: String,
}

/// Single owner of the current `BookState`.
///
/// Passed by reference to whatever needs to read or dispatch; there is no
/// process-wide instance.
#[derive(Debug, Default)]
pub struct Store {
    state: Arc<BookState>,
    dispatched: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: BookState) -> Self {
        Self {
            state: Arc::new(state),
            dispatched: 0,
        }
    }

    /// Borrow the current state.
    pub fn state(&self) -> &BookState {
        &self.state
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<BookState> {
        Arc::clone(&self.state)
    }

    /// Number of actions applied so far.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Apply an action. Actions are applied strictly in call order.
    pub fn dispatch(&mut self, action: Action) {
        debug!("dispatch #{}: {:?}", self.dispatched + 1, action);
        self.state = Arc::new(reduce(&self.state, action));
        self.dispatched += 1;
    }
}
