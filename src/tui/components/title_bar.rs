//! # TitleBar Component
//!
//! Top status bar showing where the user is.
//!
//! ## Conditional Formatting
//!
//! 1. **Detail screen**: `"Folio | Book #42 | Esc back"`
//! 2. **List screen**: `"Folio | Books · page 3"`
//! 3. **List screen, query set**: `"Folio | Books · page 3 | search: \"title 5\""`
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.

use crate::core::navigation::Route;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Route on top of the navigator stack
    pub route: Route,
    /// List screen's current page
    pub page: usize,
    /// Current search text
    pub query: String,
}

impl TitleBar {
    pub fn new(route: Route, page: usize, query: String) -> Self {
        Self { route, page, query }
    }

    pub fn text(&self) -> String {
        match self.route {
            Route::BookDetails { book_id } => format!("Folio | Book #{book_id} | Esc back"),
            Route::BookList if self.query.is_empty() => {
                format!("Folio | Books · page {}", self.page)
            }
            Route::BookList => format!(
                "Folio | Books · page {} | search: \"{}\"",
                self.page, self.query
            ),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().fg(Color::Yellow));
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_list_title() {
        let bar = TitleBar::new(Route::BookList, 3, String::new());
        assert_eq!(bar.text(), "Folio | Books · page 3");
    }

    #[test]
    fn test_list_title_with_query() {
        let bar = TitleBar::new(Route::BookList, 1, "title 5".to_string());
        assert_eq!(bar.text(), "Folio | Books · page 1 | search: \"title 5\"");
    }

    #[test]
    fn test_details_title() {
        let mut bar = TitleBar::new(Route::BookDetails { book_id: 42 }, 5, "x".to_string());
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Folio | Book #42"));
        assert!(!text.contains("search"));
    }
}
