//! # Core Application Logic
//!
//! This module contains Folio's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • BookState (data)     │
//!                    │  • Action (events)      │
//!                    │  • reduce() (reducer)   │
//!                    │  • Navigator (routes)   │
//!                    │                         │
//!                    │  No terminal. No UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Headless  │      │  Backend   │
//!     │  Adapter   │      │ `page` cmd │      │  (future)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`book`]: The `Book` record
//! - [`catalog`]: The generated in-memory catalog and page slicing
//! - [`source`]: Async `BookSource` trait over the catalog
//! - [`state`]: `BookState` and the `Store` that owns it
//! - [`action`]: The `Action` enum and the `reduce()` function
//! - [`pager`]: Page counter and has-more flag for the list screen
//! - [`search`]: Title filter
//! - [`navigation`]: Routes and the navigator stack
//! - [`config`]: Settings with defaults, file, env and CLI overrides

pub mod action;
pub mod book;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod pager;
pub mod search;
pub mod source;
pub mod state;
