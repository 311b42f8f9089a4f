//! # BookDetails Component
//!
//! Read-only view of the store's selected book. Long descriptions wrap and
//! the whole view scrolls.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BookDetailsState` lives in `TuiState`
//! - `BookDetails` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::book::Book;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const NO_SELECTION: &str = "No book selected.";

#[derive(Default)]
pub struct BookDetailsState {
    pub scroll_state: ScrollViewState,
}

impl BookDetailsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

/// Events emitted by the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsEvent {
    Back,
}

impl EventHandler for BookDetailsState {
    type Event = DetailsEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape | TuiEvent::Back | TuiEvent::Backspace => Some(DetailsEvent::Back),
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::PageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::PageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            _ => None,
        }
    }
}

pub struct BookDetails<'a> {
    pub state: &'a mut BookDetailsState,
    pub book: Option<&'a Book>,
}

impl<'a> BookDetails<'a> {
    pub fn new(state: &'a mut BookDetailsState, book: Option<&'a Book>) -> Self {
        Self { state, book }
    }

    /// Wrapped lines for one labelled field.
    fn field(label: &str, value: &str, width: usize) -> Vec<Line<'static>> {
        let label_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let text = format!("{label}: {value}");
        let mut lines: Vec<Line<'static>> = textwrap::wrap(&text, width.max(1))
            .into_iter()
            .map(|chunk| Line::from(chunk.into_owned()))
            .collect();
        // Restyle the label on the first line
        if let Some(first) = lines.first_mut() {
            let rest = first
                .spans
                .first()
                .map(|s| s.content.to_string())
                .unwrap_or_default();
            let prefix = format!("{label}:");
            if let Some(tail) = rest.strip_prefix(&prefix) {
                *first = Line::from(vec![
                    Span::styled(prefix, label_style),
                    Span::raw(tail.to_string()),
                ]);
            }
        }
        lines
    }

    pub fn lines(book: &Book, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        lines.extend(Self::field("Title", &book.title, width));
        lines.extend(Self::field("Author", &book.author, width));
        lines.extend(Self::field(
            "Description",
            book.description.as_deref().unwrap_or_default(),
            width,
        ));
        lines.extend(Self::field("Publish Date", &book.publish_date, width));
        lines
    }
}

impl<'a> Component for BookDetails<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(book) = self.book else {
            let empty = Paragraph::new(NO_SELECTION)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        };

        // -1 for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let lines = Self::lines(book, content_width as usize);
        let height = lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, height),
        );
        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_book;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(book: Option<&Book>, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = BookDetailsState::new();
        terminal
            .draw(|f| BookDetails::new(&mut state, book).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_no_selection() {
        let text = render_text(None, 40, 5);
        assert!(text.contains("No book selected."));
    }

    #[test]
    fn test_shows_all_fields_verbatim() {
        let book = sample_book(12);
        let text = render_text(Some(&book), 80, 10);
        assert!(text.contains("Title: Book Title 12"));
        assert!(text.contains("Author: Author 12"));
        assert!(text.contains("Description: This is the description for Book Title 12"));
        assert!(text.contains("Publish Date: 2021-01-01"));
    }

    #[test]
    fn test_long_description_wraps() {
        let mut book = sample_book(1);
        book.description = Some("word ".repeat(40));
        let lines = BookDetails::lines(&book, 30);
        // title, author, publish date + several description lines
        assert!(lines.len() > 5);
        for line in &lines {
            assert!(line.width() <= 30);
        }
    }

    #[test]
    fn test_missing_description_renders_empty_field() {
        let mut book = sample_book(1);
        book.description = None;
        let lines = BookDetails::lines(&book, 80);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_back_keys() {
        let mut state = BookDetailsState::new();
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(DetailsEvent::Back));
        assert_eq!(state.handle_event(&TuiEvent::Back), Some(DetailsEvent::Back));
        assert_eq!(state.handle_event(&TuiEvent::CursorDown), None);
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
    }
}
