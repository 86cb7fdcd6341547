use std::collections::HashSet;

use crate::actions::{ActionError, ActionValue, ReducerGroup};
use crate::pagination::{library_capacity, max_page};
use crate::state::{AppState, Book, Listing, Location};
use crate::ui::mvi::Reducer;
use crate::ui::render::render_titles;

use super::intent::LibraryIntent;

pub struct LibraryReducer;

impl Reducer for LibraryReducer {
    type State = AppState;
    type Intent = LibraryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LibraryIntent::GoToBook(number) => {
                let line_number = state.library.page * library_capacity(state.dimensions);
                let target = line_number.saturating_add(number);
                if target >= state.books.len() {
                    tracing::warn!(number, target, "no book at selection");
                    return state;
                }
                AppState {
                    location: Location::Book,
                    book: target,
                    home_menu_visible: false,
                    ..state
                }
            }
            LibraryIntent::SetBooks(books) => {
                let books = sort_books(books);
                let book = follow_open_book(&state, &books);
                let data = render_titles(&books, state.dimensions.width);
                AppState {
                    location: Location::Library,
                    library: Listing { data, page: 0 },
                    book,
                    books,
                    ..state
                }
            }
            LibraryIntent::AddBooks(new_books) => {
                let mut known: HashSet<String> =
                    state.books.iter().map(|b| b.filename.clone()).collect();
                let mut books = state.books.clone();
                books.extend(
                    new_books
                        .into_iter()
                        .filter(|b| known.insert(b.filename.clone())),
                );
                let books = sort_books(books);
                let book = follow_open_book(&state, &books);
                let data = render_titles(&books, state.dimensions.width);
                AppState {
                    library: Listing {
                        data,
                        page: state.library.page,
                    },
                    book,
                    books,
                    ..state
                }
            }
            LibraryIntent::RemoveBooks(filenames) => {
                let gone: HashSet<&str> = filenames.iter().map(String::as_str).collect();
                let books: Vec<Book> = state
                    .books
                    .iter()
                    .filter(|b| !gone.contains(b.filename.as_str()))
                    .cloned()
                    .collect();
                let book = follow_open_book(&state, &books);
                let data = render_titles(&books, state.dimensions.width);
                let last = max_page(data.len(), library_capacity(state.dimensions));
                let page = state.library.page.min(last);
                AppState {
                    library: Listing { data, page },
                    book,
                    books,
                    ..state
                }
            }
            LibraryIntent::ReplaceLibrary(value) => {
                if !state.replacing_library.accepts(value) {
                    return state;
                }
                AppState {
                    replacing_library: value,
                    location: Location::Library,
                    ..state
                }
            }
        }
    }
}

impl ReducerGroup for LibraryReducer {
    const NAME: &'static str = "library";
    const OPERATIONS: &'static [&'static str] = &[
        "go_to_book",
        "set_books",
        "add_books",
        "remove_books",
        "replace_library",
    ];

    fn decode(action: &str, value: ActionValue) -> Result<LibraryIntent, ActionError> {
        match action {
            "go_to_book" => Ok(LibraryIntent::GoToBook(value.into_index(action)?)),
            "set_books" => Ok(LibraryIntent::SetBooks(value.into_books(action)?)),
            "add_books" => Ok(LibraryIntent::AddBooks(value.into_books(action)?)),
            "remove_books" => Ok(LibraryIntent::RemoveBooks(value.into_filenames(action)?)),
            "replace_library" => Ok(LibraryIntent::ReplaceLibrary(value.into_flag(action)?)),
            _ => Err(ActionError::UnknownOperation {
                group: Self::NAME,
                action: action.to_string(),
            }),
        }
    }
}

/// Books in display order: by title, ties kept in their incoming order.
pub fn sort_books(mut books: Vec<Book>) -> Vec<Book> {
    books.sort_by(|a, b| a.title.cmp(&b.title));
    books
}

/// Index in `books` of the book open in `state`, or 0 if it is gone.
fn follow_open_book(state: &AppState, books: &[Book]) -> usize {
    state
        .open_book()
        .and_then(|open| books.iter().position(|b| b.filename == open.filename))
        .unwrap_or(0)
}
