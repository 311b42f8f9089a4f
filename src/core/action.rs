//! # Actions
//!
//! Everything that can change the store becomes an `Action`.
//! List screen mounts? That's `Action::StartLoading`.
//! Page arrives? That's `Action::SetSuccess(books)`.
//!
//! The `reduce()` function takes the current state and an action,
//! then returns the new state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  reduce()  →  New State
//! ```
//!
//! This makes everything testable: `assert_eq!(reduce(&state, action), expected)`.

use crate::core::book::Book;
use crate::core::state::BookState;

/// Message stored when a page fetch fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load books";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fetch started: loading on, error cleared.
    StartLoading,
    /// A fetch finished: replace the book list, loading off.
    SetSuccess(Vec<Book>),
    /// A fetch failed: loading off, error set.
    SetFailure(String),
    /// Set or clear the selected book.
    Select(Option<Book>),
    /// Set the search text verbatim.
    SetQuery(String),
}

pub fn reduce(state: &BookState, action: Action) -> BookState {
    let mut next = state.clone();
    match action {
        Action::StartLoading => {
            next.is_loading = true;
            next.error = None;
        }
        Action::SetSuccess(books) => {
            next.books = books;
            next.is_loading = false;
        }
        Action::SetFailure(message) => {
            next.is_loading = false;
            next.error = Some(message);
        }
        Action::Select(book) => {
            next.selected_book = book;
        }
        Action::SetQuery(query) => {
            next.search_query = query;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_book;

    fn busy_state() -> BookState {
        BookState {
            books: vec![sample_book(1)],
            selected_book: Some(sample_book(1)),
            is_loading: false,
            error: Some("old error".to_string()),
            search_query: "old".to_string(),
        }
    }

    #[test]
    fn test_start_loading_clears_error() {
        let next = reduce(&busy_state(), Action::StartLoading);
        assert!(next.is_loading);
        assert!(next.error.is_none());
        assert_eq!(next.books, vec![sample_book(1)]);
    }

    #[test]
    fn test_start_then_success_from_any_state() {
        let list = vec![sample_book(7), sample_book(8)];
        for prior in [BookState::default(), busy_state()] {
            let loading = reduce(&prior, Action::StartLoading);
            let done = reduce(&loading, Action::SetSuccess(list.clone()));
            assert!(!done.is_loading);
            assert_eq!(done.books, list);
        }
    }

    #[test]
    fn test_success_replaces_instead_of_appending() {
        let next = reduce(&busy_state(), Action::SetSuccess(vec![sample_book(2)]));
        assert_eq!(next.books, vec![sample_book(2)]);
    }

    #[test]
    fn test_failure_sets_error_and_stops_loading() {
        let loading = reduce(&BookState::default(), Action::StartLoading);
        let next = reduce(&loading, Action::SetFailure(LOAD_FAILED_MESSAGE.to_string()));
        assert!(!next.is_loading);
        assert_eq!(next.error.as_deref(), Some("Failed to load books"));
    }

    #[test]
    fn test_select_and_clear() {
        let selected = reduce(&BookState::default(), Action::Select(Some(sample_book(4))));
        assert_eq!(selected.selected_book, Some(sample_book(4)));
        let cleared = reduce(&selected, Action::Select(None));
        assert!(cleared.selected_book.is_none());
    }

    #[test]
    fn test_set_query_is_verbatim() {
        let next = reduce(&BookState::default(), Action::SetQuery("  MiXeD <b> ".to_string()));
        assert_eq!(next.search_query, "  MiXeD <b> ");
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = busy_state();
        let _ = reduce(&state, Action::SetSuccess(Vec::new()));
        assert_eq!(state, busy_state());
    }
}
