//! Text lines the reader shows for a snapshot.
//!
//! Turning text into dot patterns happens on the far side of the driver;
//! everything here is plain text cut to the display width.

use crate::pagination::{book_capacity, library_capacity, max_page};
use crate::state::{AppState, Book, Location};

/// `line` cut or space-padded to exactly `width` characters.
pub fn pad_line(width: usize, line: &str) -> String {
    let mut padded: String = line.chars().take(width).collect();
    let len = padded.chars().count();
    padded.push_str(&" ".repeat(width - len));
    padded
}

/// One library line per book, in the given order.
pub fn render_titles(books: &[Book], width: usize) -> Vec<String> {
    books.iter().map(|b| pad_line(width, &b.title)).collect()
}

/// The rows currently on the display, header first.
pub fn visible_lines(state: &AppState) -> Vec<String> {
    let width = state.dimensions.width;
    let height = state.dimensions.height;
    let mut lines = match state.location {
        Location::Library => {
            let capacity = library_capacity(state.dimensions);
            let last = max_page(state.library.data.len(), capacity);
            let mut lines = vec![pad_line(
                width,
                &format!("library {}/{}", state.library.page + 1, last + 1),
            )];
            lines.extend(
                state
                    .library
                    .data
                    .iter()
                    .skip(state.library.page * capacity)
                    .take(capacity)
                    .cloned(),
            );
            lines
        }
        Location::SystemMenu => {
            let capacity = library_capacity(state.dimensions);
            let mut lines = vec![pad_line(width, "system menu")];
            lines.extend(
                state
                    .system_menu
                    .data
                    .iter()
                    .skip(state.system_menu.page * capacity)
                    .take(capacity)
                    .map(|line| pad_line(width, line.trim_end())),
            );
            lines
        }
        Location::GoToPage => vec![pad_line(
            width,
            &format!("go to page: {}", state.go_to_page.selection),
        )],
        Location::Book => match state.open_book() {
            Some(book) => {
                let last = max_page(book.lines, book_capacity(state.dimensions));
                let mut lines = vec![pad_line(
                    width,
                    &format!("{} {}/{}", book.title, book.page + 1, last + 1),
                )];
                if state.home_menu_visible {
                    lines.push(pad_line(width, "go to page"));
                    lines.push(pad_line(width, "go to start"));
                }
                lines
            }
            None => vec![pad_line(width, "no books")],
        },
    };
    lines.truncate(height);
    lines
}
