//! # SearchBox Component
//!
//! Single-line title filter above the book list. Owns the text buffer;
//! the list screen mirrors every change into the store as `SetQuery`.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Search books by title";

/// Height including borders.
pub const SEARCH_BOX_HEIGHT: u16 = 3;

#[derive(Debug, Default)]
pub struct SearchBox {
    pub buffer: String,
    /// Whether the terminal cursor should be placed in the box.
    pub focused: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
        }
    }
}

impl EventHandler for SearchBox {
    /// The new query text.
    type Event = String;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(self.buffer.clone())
            }
            TuiEvent::Paste(text) => {
                // Single-line input
                let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                if line.is_empty() {
                    return None;
                }
                self.buffer.push_str(&line);
                Some(self.buffer.clone())
            }
            TuiEvent::Backspace => self.buffer.pop().map(|_| self.buffer.clone()),
            _ => None,
        }
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(self.buffer.as_str())
        };

        let block = Block::bordered()
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Search ");
        frame.render_widget(Paragraph::new(line).block(block), area);

        if self.focused && area.width > 2 && area.height > 2 {
            let max_x = area.x + area.width - 2;
            let x = (area.x + 1 + self.buffer.width() as u16).min(max_x);
            frame.set_cursor_position(Position { x, y: area.y + 1 });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(search: &mut SearchBox) -> String {
        let backend = TestBackend::new(40, SEARCH_BOX_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| search.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_emits_query() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::InputChar('T')), Some("T".to_string()));
        assert_eq!(search.handle_event(&TuiEvent::InputChar('i')), Some("Ti".to_string()));
        assert_eq!(search.handle_event(&TuiEvent::Backspace), Some("T".to_string()));
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut search = SearchBox::new();
        assert_eq!(search.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut search = SearchBox::new();
        let query = search.handle_event(&TuiEvent::Paste("Title\n5".to_string()));
        assert_eq!(query.as_deref(), Some("Title5"));
    }

    #[test]
    fn test_placeholder_when_empty() {
        let mut search = SearchBox::new();
        assert!(rendered(&mut search).contains(PLACEHOLDER));
        search.buffer = "Title 5".to_string();
        let text = rendered(&mut search);
        assert!(text.contains("Title 5"));
        assert!(!text.contains(PLACEHOLDER));
    }
}
