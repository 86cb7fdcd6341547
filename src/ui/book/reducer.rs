use crate::actions::{ActionError, ActionValue, ReducerGroup};
use crate::pagination::{book_capacity, clamp_page};
use crate::state::{AppState, Location};
use crate::ui::mvi::Reducer;

use super::intent::BookIntent;

pub struct BookReducer;

impl Reducer for BookReducer {
    type State = AppState;
    type Intent = BookIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BookIntent::GoToStart => go_to_page(state, 0),
            BookIntent::SkipPages(delta) => {
                let current = state.open_book().map_or(0, |book| book.page);
                go_to_page(state, (current as i64).saturating_add(delta))
            }
            BookIntent::GoToPage(target) => go_to_page(state, target),
            BookIntent::EnterGoToPage => AppState {
                location: Location::GoToPage,
                home_menu_visible: false,
                ..state
            },
            BookIntent::ToggleHomeMenu => AppState {
                home_menu_visible: !state.home_menu_visible,
                ..state
            },
        }
    }
}

impl ReducerGroup for BookReducer {
    const NAME: &'static str = "book";
    const OPERATIONS: &'static [&'static str] = &[
        "go_to_start",
        "skip_pages",
        "go_to_page",
        "enter_go_to_page",
        "toggle_home_menu",
    ];

    fn decode(action: &str, value: ActionValue) -> Result<BookIntent, ActionError> {
        match action {
            "go_to_start" => Ok(BookIntent::GoToStart),
            "skip_pages" => Ok(BookIntent::SkipPages(value.into_number(action)?)),
            "go_to_page" => Ok(BookIntent::GoToPage(value.into_number(action)?)),
            "enter_go_to_page" => Ok(BookIntent::EnterGoToPage),
            "toggle_home_menu" => Ok(BookIntent::ToggleHomeMenu),
            _ => Err(ActionError::UnknownOperation {
                group: Self::NAME,
                action: action.to_string(),
            }),
        }
    }
}

fn go_to_page(state: AppState, target: i64) -> AppState {
    let state = set_open_book_page(state, target);
    AppState {
        location: Location::Book,
        home_menu_visible: false,
        ..state
    }
}

/// Clamp `requested` into the open book and store it as that book's page.
///
/// The book is rebuilt rather than edited, so the `Book` values of the
/// previous snapshot are never touched. Without an open book the state is
/// returned as is.
pub(crate) fn set_open_book_page(state: AppState, requested: i64) -> AppState {
    let Some(book) = state.open_book() else {
        return state;
    };
    let page = clamp_page(book.lines, requested, book_capacity(state.dimensions));
    if page == book.page {
        return state;
    }

    let updated = book.with_page(page);
    let mut books = state.books;
    books[state.book] = updated;
    AppState { books, ..state }
}
