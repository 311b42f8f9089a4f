//! # BookList Component
//!
//! The list screen: search box, the filtered rows of the current page and a
//! footer with paging status.
//!
//! ## Architecture
//!
//! `BookList` is a transient component (created each frame) that wraps
//! `&'a mut BookListState` (persistent state) and the current `BookState`
//! (props). Fetch bookkeeping lives on the state: `begin_fetch` and
//! `finish_fetch` dispatch the store actions around a page fetch and track
//! which fetch generation the screen is waiting for.
//!
//! ## Display states
//!
//! 1. Loading the first page: full-screen spinner
//! 2. Error set: the error text
//! 3. Otherwise: search box, rows, footer (small spinner while a later page loads)

use std::sync::Arc;

use log::{debug, warn};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::action::{Action, LOAD_FAILED_MESSAGE};
use crate::core::book::Book;
use crate::core::catalog::Page;
use crate::core::pager::Pager;
use crate::core::search::filter_books;
use crate::core::source::FetchError;
use crate::core::state::{BookState, Store};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::search_box::{SEARCH_BOX_HEIGHT, SearchBox};
use crate::tui::event::TuiEvent;

/// Lines per row: title, author, description, spacer.
pub const ROW_HEIGHT: u16 = 4;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// High-level events emitted by the list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// Search text changed.
    QueryChanged(String),
    /// The user tried to move past the last row.
    EndReached,
    /// A row was activated.
    Open(Book),
    /// Ctrl+R: fetch the current page again.
    Refresh,
    Escape,
}

/// A fetch the screen has started and is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub page: usize,
    pub generation: u64,
}

pub struct BookListState {
    pub pager: Pager,
    pub search: SearchBox,
    /// Books of the current page that pass the search filter.
    pub filtered: Vec<Book>,
    pub list_state: ListState,
    /// Rows that fit on screen, measured during the last render.
    pub visible_rows: usize,
    /// Snapshot `filtered` was computed from.
    seen: Option<Arc<BookState>>,
    in_flight: Option<u64>,
    generation: u64,
}

impl Default for BookListState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookListState {
    pub fn new() -> Self {
        Self {
            pager: Pager::new(),
            search: SearchBox::new(),
            filtered: Vec::new(),
            list_state: ListState::default(),
            visible_rows: 0,
            seen: None,
            in_flight: None,
            generation: 0,
        }
    }

    /// Recompute the filtered rows if the store changed since the last call.
    pub fn sync(&mut self, snapshot: &Arc<BookState>) {
        if let Some(seen) = &self.seen {
            if Arc::ptr_eq(seen, snapshot) {
                return;
            }
            if seen.books == snapshot.books && seen.search_query == snapshot.search_query {
                self.seen = Some(Arc::clone(snapshot));
                return;
            }
        }
        let page_changed = self
            .seen
            .as_ref()
            .is_none_or(|seen| seen.books != snapshot.books);

        self.filtered = filter_books(&snapshot.books, &snapshot.search_query);
        self.seen = Some(Arc::clone(snapshot));

        let selected = if self.filtered.is_empty() {
            None
        } else if page_changed {
            *self.list_state.offset_mut() = 0;
            Some(0)
        } else {
            Some(
                self.list_state
                    .selected()
                    .unwrap_or(0)
                    .min(self.filtered.len() - 1),
            )
        };
        self.list_state.select(selected);
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.list_state.selected().and_then(|i| self.filtered.get(i))
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start loading the pager's current page.
    pub fn begin_fetch(&mut self, store: &mut Store) -> FetchRequest {
        self.generation += 1;
        self.in_flight = Some(self.generation);
        store.dispatch(Action::StartLoading);
        FetchRequest {
            page: self.pager.page(),
            generation: self.generation,
        }
    }

    /// Apply the result of a fetch. Returns false when the result belongs to
    /// a fetch the screen is no longer waiting for.
    pub fn finish_fetch(
        &mut self,
        store: &mut Store,
        generation: u64,
        result: Result<Page, FetchError>,
    ) -> bool {
        if self.in_flight != Some(generation) {
            debug!("Dropping result of stale fetch generation {}", generation);
            return false;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                if self.pager.record(&page) {
                    store.dispatch(Action::SetSuccess(page.books));
                } else {
                    warn!("Fetch returned page {} for page {}", page.number, self.pager.page());
                    let current = store.state().books.clone();
                    store.dispatch(Action::SetSuccess(current));
                }
            }
            Err(FetchError::Cancelled) => {
                self.pager.rollback();
                let current = store.state().books.clone();
                store.dispatch(Action::SetSuccess(current));
            }
            Err(FetchError::Source(_)) => {
                store.dispatch(Action::SetFailure(LOAD_FAILED_MESSAGE.to_string()));
            }
        }
        true
    }

    /// Give up on the in-flight fetch, keeping the rows already shown.
    pub fn cancel_fetch(&mut self, store: &mut Store) {
        if let Some(generation) = self.in_flight {
            self.finish_fetch(store, generation, Err(FetchError::Cancelled));
        }
    }

    fn move_down(&mut self, rows: usize) -> Option<ListEvent> {
        let len = self.filtered.len();
        match self.list_state.selected() {
            Some(i) if i + 1 < len => {
                self.list_state.select(Some((i + rows).min(len - 1)));
                None
            }
            _ => Some(ListEvent::EndReached),
        }
    }

    fn move_up(&mut self, rows: usize) {
        if let Some(i) = self.list_state.selected() {
            self.list_state.select(Some(i.saturating_sub(rows)));
        }
    }
}

impl EventHandler for BookListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let page_rows = self.visible_rows.max(1);
        match event {
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.move_down(1),
            TuiEvent::PageDown => self.move_down(page_rows),
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.move_up(1);
                None
            }
            TuiEvent::PageUp => {
                self.move_up(page_rows);
                None
            }
            TuiEvent::Submit => self.selected_book().cloned().map(ListEvent::Open),
            TuiEvent::Escape => Some(ListEvent::Escape),
            TuiEvent::Refresh => Some(ListEvent::Refresh),
            TuiEvent::InputChar(_) | TuiEvent::Paste(_) | TuiEvent::Backspace => {
                self.search.handle_event(event).map(ListEvent::QueryChanged)
            }
            _ => None,
        }
    }
}

/// List screen component.
/// Created fresh each frame with references to state and data.
pub struct BookList<'a> {
    pub state: &'a mut BookListState,
    pub books: &'a BookState,
    pub spinner_frame: usize,
}

impl<'a> BookList<'a> {
    pub fn new(state: &'a mut BookListState, books: &'a BookState, spinner_frame: usize) -> Self {
        Self {
            state,
            books,
            spinner_frame,
        }
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    fn render_rows(&mut self, frame: &mut Frame, area: Rect) {
        self.state.visible_rows = (area.height / ROW_HEIGHT) as usize;

        if self.state.filtered.is_empty() {
            let message = if self.books.search_query.is_empty() {
                "No books on this page.".to_string()
            } else {
                format!("No books match \"{}\" on this page.", self.books.search_query)
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .state
            .filtered
            .iter()
            .map(|book| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        fit_width(&book.title, width),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        fit_width(&book.author, width),
                        Style::default().fg(Color::Gray),
                    )),
                    Line::from(Span::styled(
                        fit_width(&book.description_preview(), width),
                        Style::default().fg(Color::DarkGray),
                    )),
                    Line::default(),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▌ ");
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let pager = &self.state.pager;
        let line = if self.books.is_loading {
            Line::from(vec![
                Span::styled(self.spinner(), Style::default().fg(Color::Blue)),
                Span::raw(format!(" Loading page {}...", pager.page())),
            ])
        } else {
            let end = if pager.has_more() {
                "↓ at end for more"
            } else {
                "end of catalog"
            };
            Line::from(Span::styled(
                format!(
                    " Page {} · {}/{} shown · Enter open · {} ",
                    pager.page(),
                    self.state.filtered.len(),
                    self.books.books.len(),
                    end
                ),
                Style::default().fg(Color::DarkGray),
            ))
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl<'a> Component for BookList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.books.is_loading && self.state.pager.is_first_page() {
            let [_, center, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(area);
            let spinner = Paragraph::new(Line::from(vec![
                Span::styled(self.spinner(), Style::default().fg(Color::Blue)),
                Span::raw(" Loading books..."),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(spinner, center);
            return;
        }

        if let Some(error) = &self.books.error {
            let [_, center, _] = Layout::vertical([
                Constraint::Fill(1),
                Constraint::Length(1),
                Constraint::Fill(1),
            ])
            .areas(area);
            let text = Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center);
            frame.render_widget(text, center);
            return;
        }

        let [search_area, rows_area, footer_area] = Layout::vertical([
            Constraint::Length(SEARCH_BOX_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.state.search.render(frame, search_area);
        self.render_rows(frame, rows_area);
        self.render_footer(frame, footer_area);
    }
}

/// Cut `s` to at most `max_width` display columns, adding "..." if needed.
fn fit_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}
