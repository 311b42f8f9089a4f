use crate::core::book::Book;
use crate::core::navigation::Route;
use crate::core::state::BookState;
use crate::tui::browser::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BookDetails, BookList, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(
    frame: &mut Frame,
    state: &BookState,
    detail_book: Option<&Book>,
    tui: &mut TuiState,
    spinner_frame: usize,
) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let route = tui.navigator.current();
    let mut title_bar = TitleBar::new(route, tui.book_list.pager.page(), state.search_query.clone());
    title_bar.render(frame, title_area);

    match route {
        Route::BookList => {
            BookList::new(&mut tui.book_list, state, spinner_frame).render(frame, main_area);
        }
        Route::BookDetails { .. } => {
            BookDetails::new(&mut tui.details, detail_book).render(frame, main_area);
        }
    }
}
