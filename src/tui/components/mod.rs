//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing the route and page
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: Title filter input
//! - `BookList`: The list screen (rows, paging, fetch bookkeeping)
//! - `BookDetails`: The detail screen
//!
//! Components receive external data as "props" (fields), not by reaching
//! into global state. The store is passed in by the event loop.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── search_box.rs    (Search input)
//! ├── book_list.rs     (List screen)
//! └── book_details.rs  (Detail screen)
//! ```

pub mod book_details;
pub mod book_list;
pub mod search_box;
mod title_bar;

pub use book_details::{BookDetails, BookDetailsState, DetailsEvent};
pub use book_list::{BookList, BookListState, ListEvent};
pub use title_bar::TitleBar;
