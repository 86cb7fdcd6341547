use crate::actions::{ActionError, ActionValue, ReducerGroup};
use crate::pagination::{book_capacity, clamp_page, library_capacity};
use crate::state::{AppState, Dimensions, GoToPageEntry, Listing, Location};
use crate::ui::book::set_open_book_page;
use crate::ui::mvi::Reducer;

use super::intent::AppIntent;

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Same value, new snapshot: the store still notifies subscribers.
            AppIntent::Trigger => state,
            AppIntent::SetDimensions(dimensions) => resize(state, dimensions),
            AppIntent::GoToLibrary => AppState {
                location: Location::Library,
                ..state
            },
            AppIntent::GoToSystemMenu => AppState {
                location: Location::SystemMenu,
                ..state
            },
            // Clears the nested go_to_page entry; there is no flat
            // `go_to_page_selection` field in the snapshot.
            AppIntent::CloseMenu => AppState {
                location: Location::Book,
                go_to_page: GoToPageEntry::default(),
                ..state
            },
            AppIntent::NextPage => turn_page(state, 1),
            AppIntent::PreviousPage => turn_page(state, -1),
            AppIntent::BackupLog(value) => AppState {
                backing_up_log: state.backing_up_log.request(value),
                ..state
            },
            AppIntent::UpdateUi(update_ui) => AppState { update_ui, ..state },
            AppIntent::Shutdown => AppState {
                shutting_down: true,
                ..state
            },
        }
    }
}

impl ReducerGroup for AppReducer {
    const NAME: &'static str = "app";
    const OPERATIONS: &'static [&'static str] = &[
        "trigger",
        "set_dimensions",
        "go_to_library",
        "go_to_system_menu",
        "close_menu",
        "next_page",
        "previous_page",
        "backup_log",
        "update_ui",
        "shutdown",
    ];

    fn decode(action: &str, value: ActionValue) -> Result<AppIntent, ActionError> {
        match action {
            "trigger" => Ok(AppIntent::Trigger),
            "set_dimensions" => {
                let dimensions = value.into_dimensions(action)?;
                if dimensions.width == 0 || dimensions.height < 2 {
                    return Err(ActionError::InvalidPayload {
                        action: action.to_string(),
                        expected: "dimensions of at least 1x2",
                        found: "dimensions",
                    });
                }
                Ok(AppIntent::SetDimensions(dimensions))
            }
            "go_to_library" => Ok(AppIntent::GoToLibrary),
            "go_to_system_menu" => Ok(AppIntent::GoToSystemMenu),
            "close_menu" => Ok(AppIntent::CloseMenu),
            "next_page" => Ok(AppIntent::NextPage),
            "previous_page" => Ok(AppIntent::PreviousPage),
            "backup_log" => Ok(AppIntent::BackupLog(value.into_flag(action)?)),
            "update_ui" => Ok(AppIntent::UpdateUi(value.into_bool(action)?)),
            "shutdown" => Ok(AppIntent::Shutdown),
            _ => Err(ActionError::UnknownOperation {
                group: Self::NAME,
                action: action.to_string(),
            }),
        }
    }
}

/// Swap in new display dimensions and pull every page index back inside
/// the page count the new size allows.
fn resize(state: AppState, dimensions: Dimensions) -> AppState {
    let library_cap = library_capacity(dimensions);
    let book_cap = book_capacity(dimensions);
    let library = Listing {
        page: clamp_page(
            state.library.data.len(),
            state.library.page as i64,
            library_cap,
        ),
        data: state.library.data,
    };
    let books = state
        .books
        .iter()
        .map(|book| book.with_page(clamp_page(book.lines, book.page as i64, book_cap)))
        .collect();
    AppState {
        dimensions,
        library,
        books,
        ..state
    }
}

/// Move one page forward or back on whichever screen pages.
fn turn_page(state: AppState, delta: i64) -> AppState {
    match state.location {
        Location::Library => {
            let capacity = library_capacity(state.dimensions);
            let requested = state.library.page as i64 + delta;
            let page = clamp_page(state.library.data.len(), requested, capacity);
            AppState {
                library: Listing {
                    page,
                    data: state.library.data,
                },
                ..state
            }
        }
        Location::Book => {
            let Some(current) = state.open_book().map(|book| book.page) else {
                return state;
            };
            set_open_book_page(state, current as i64 + delta)
        }
        Location::GoToPage | Location::SystemMenu => state,
    }
}
