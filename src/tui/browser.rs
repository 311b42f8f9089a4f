//! # Browser
//!
//! Glue between the store, the two screens and the fetch tasks. The event
//! loop feeds it `TuiEvent`s and finished fetches; everything that changes
//! the store goes through here.
//!
//! ```text
//! TuiEvent ──► screen.handle_event ──► ListEvent / DetailsEvent
//!                                          │
//!                      ┌───────────────────┼──────────────────┐
//!                      ▼                   ▼                  ▼
//!               store.dispatch      navigator.push/pop   spawn_fetch
//!                                                              │
//! FetchOutcome ◄───────────── mpsc ◄───────────────────────────┘
//! ```

use std::sync::{Arc, mpsc};

use log::{debug, info, warn};
use ratatui::Frame;

use crate::core::action::Action;
use crate::core::book::Book;
use crate::core::navigation::{Navigator, Route};
use crate::core::source::BookSource;
use crate::core::state::Store;
use crate::tui::component::EventHandler;
use crate::tui::components::{BookDetailsState, BookListState, DetailsEvent, ListEvent};
use crate::tui::event::TuiEvent;
use crate::tui::fetch::{FetchOutcome, FetchTask, spawn_fetch};
use crate::tui::ui;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub navigator: Navigator,
    pub book_list: BookListState,
    pub details: BookDetailsState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            navigator: Navigator::new(),
            book_list: BookListState::new(),
            details: BookDetailsState::new(),
        }
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Browser {
    pub store: Store,
    pub tui: TuiState,
    source: Arc<dyn BookSource>,
    fetch: Option<FetchTask>,
    tx: mpsc::Sender<FetchOutcome>,
    rx: mpsc::Receiver<FetchOutcome>,
}

impl Browser {
    pub fn new(store: Store, source: Arc<dyn BookSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            store,
            tui: TuiState::new(),
            source,
            fetch: None,
            tx,
            rx,
        }
    }

    /// List screen mount: fetch the first page. Must run inside a tokio runtime.
    pub fn mount(&mut self) {
        info!("Mounting list screen with source {}", self.source.name());
        self.start_fetch();
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// The book the detail screen shows: the store's selection.
    pub fn detail_book(&self) -> Option<&Book> {
        self.check_detail_route();
        self.store.state().selected_book.as_ref()
    }

    /// Draw the active screen.
    pub fn draw(&mut self, frame: &mut Frame, spinner_frame: usize) {
        let state = self.store.state();
        ui::draw_ui(
            frame,
            state,
            state.selected_book.as_ref(),
            &mut self.tui,
            spinner_frame,
        );
    }

    /// The detail route carries a book id but the screen reads the store's
    /// selection. Log when the two disagree.
    fn check_detail_route(&self) {
        let selected = self.store.state().selected_book.as_ref().map(|b| b.id);
        if let Route::BookDetails { book_id } = self.tui.navigator.current()
            && selected != Some(book_id)
        {
            warn!(
                "Detail route is for book {} but selection is {:?}",
                book_id, selected
            );
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Flow {
        let flow = match event {
            TuiEvent::ForceQuit => Flow::Quit,
            TuiEvent::Resize => Flow::Continue,
            _ => match self.tui.navigator.current() {
                Route::BookList => self.handle_list_event(event),
                Route::BookDetails { .. } => self.handle_details_event(event),
            },
        };
        self.tui.book_list.sync(&self.store.snapshot());
        self.check_detail_route();
        flow
    }

    /// Apply every finished fetch waiting in the channel.
    /// Returns true if anything was applied.
    pub fn drain_outcomes(&mut self) -> bool {
        let mut applied = false;
        while let Ok(outcome) = self.rx.try_recv() {
            debug!(
                "Fetch outcome: page {} generation {} ok={}",
                outcome.page,
                outcome.generation,
                outcome.result.is_ok()
            );
            if self
                .tui
                .book_list
                .finish_fetch(&mut self.store, outcome.generation, outcome.result)
            {
                applied = true;
                if self
                    .fetch
                    .as_ref()
                    .is_some_and(|task| task.generation() == outcome.generation)
                {
                    self.fetch = None;
                }
            }
        }
        if applied {
            self.tui.book_list.sync(&self.store.snapshot());
        }
        applied
    }

    /// Abort whatever is in flight; used on shutdown.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.fetch.take() {
            task.cancel();
        }
    }

    fn handle_list_event(&mut self, event: &TuiEvent) -> Flow {
        let Some(list_event) = self.tui.book_list.handle_event(event) else {
            return Flow::Continue;
        };
        match list_event {
            ListEvent::QueryChanged(query) => {
                self.store.dispatch(Action::SetQuery(query));
            }
            ListEvent::EndReached => {
                let state = self.store.state();
                // The error view hides the list, so there is no end to reach
                if state.error.is_some() {
                    debug!("Ignoring end of list while the error view is shown");
                    return Flow::Continue;
                }
                let is_loading = state.is_loading;
                if self.tui.book_list.pager.advance(is_loading).is_some() {
                    self.start_fetch();
                }
            }
            ListEvent::Open(book) => self.open(book),
            ListEvent::Refresh => {
                if !self.store.state().is_loading {
                    self.start_fetch();
                }
            }
            ListEvent::Escape => {
                if self.tui.book_list.is_fetching() {
                    self.cancel_fetch();
                } else {
                    return Flow::Quit;
                }
            }
        }
        Flow::Continue
    }

    fn handle_details_event(&mut self, event: &TuiEvent) -> Flow {
        if let Some(DetailsEvent::Back) = self.tui.details.handle_event(event) {
            self.tui.navigator.pop();
        }
        Flow::Continue
    }

    fn open(&mut self, book: Book) {
        let book_id = book.id;
        self.store.dispatch(Action::Select(Some(book)));
        self.tui.details.reset();
        self.tui.navigator.push(Route::BookDetails { book_id });
    }

    fn start_fetch(&mut self) {
        let request = self.tui.book_list.begin_fetch(&mut self.store);
        // Replacing the task aborts the previous one.
        self.fetch = Some(spawn_fetch(
            Arc::clone(&self.source),
            request.page,
            request.generation,
            self.tx.clone(),
        ));
    }

    fn cancel_fetch(&mut self) {
        if let Some(task) = self.fetch.take() {
            task.cancel();
        }
        self.tui.book_list.cancel_fetch(&mut self.store);
    }
}
