use crate::actions::{ActionError, ActionValue, ReducerGroup};
use crate::pagination::{book_capacity, max_page};
use crate::state::{AppState, GoToPageEntry, Location};
use crate::ui::book::{BookIntent, BookReducer};
use crate::ui::mvi::Reducer;

use super::intent::GoToPageIntent;

pub struct GoToPageReducer;

impl Reducer for GoToPageReducer {
    type State = AppState;
    type Intent = GoToPageIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GoToPageIntent::Key(digit) => {
                let mut keys_pressed = state.go_to_page.keys_pressed.clone();
                keys_pressed.push(char::from(b'0' + digit.min(9)));
                with_keys(state, keys_pressed)
            }
            GoToPageIntent::Delete => {
                let mut keys_pressed = state.go_to_page.keys_pressed.clone();
                keys_pressed.pop();
                with_keys(state, keys_pressed)
            }
            GoToPageIntent::Confirm => {
                let target = state.go_to_page.selection.parse::<i64>().ok();
                let state = match target {
                    // Entry is 1-based; book pages are indices.
                    Some(number) => BookReducer::reduce(state, BookIntent::GoToPage(number - 1)),
                    None => AppState {
                        location: Location::Book,
                        ..state
                    },
                };
                AppState {
                    go_to_page: GoToPageEntry::default(),
                    ..state
                }
            }
            GoToPageIntent::Cancel => AppState {
                location: Location::Book,
                go_to_page: GoToPageEntry::default(),
                ..state
            },
        }
    }
}

impl ReducerGroup for GoToPageReducer {
    const NAME: &'static str = "go_to_page";
    const OPERATIONS: &'static [&'static str] = &[
        "go_to_page_key",
        "go_to_page_delete",
        "go_to_page_confirm",
        "go_to_page_cancel",
    ];

    fn decode(action: &str, value: ActionValue) -> Result<GoToPageIntent, ActionError> {
        match action {
            "go_to_page_key" => match value {
                ActionValue::Number(n @ 0..=9) => Ok(GoToPageIntent::Key(n as u8)),
                other => Err(ActionError::InvalidPayload {
                    action: action.to_string(),
                    expected: "digit",
                    found: other.kind_name(),
                }),
            },
            "go_to_page_delete" => Ok(GoToPageIntent::Delete),
            "go_to_page_confirm" => Ok(GoToPageIntent::Confirm),
            "go_to_page_cancel" => Ok(GoToPageIntent::Cancel),
            _ => Err(ActionError::UnknownOperation {
                group: Self::NAME,
                action: action.to_string(),
            }),
        }
    }
}

fn with_keys(state: AppState, keys_pressed: String) -> AppState {
    let selection = normalize_selection(&keys_pressed, page_number_digits(&state));
    AppState {
        go_to_page: GoToPageEntry {
            selection,
            keys_pressed,
        },
        ..state
    }
}

/// Digits needed to write the open book's last page number.
fn page_number_digits(state: &AppState) -> usize {
    let pages = match state.open_book() {
        Some(book) => max_page(book.lines, book_capacity(state.dimensions)) + 1,
        None => 1,
    };
    pages.to_string().len()
}

/// Leading zeros stripped; when more digits were typed than the longest
/// page number has, only the most recent ones count.
fn normalize_selection(keys_pressed: &str, max_digits: usize) -> String {
    let digits = keys_pressed.trim_start_matches('0');
    let skip = digits.len().saturating_sub(max_digits);
    digits[skip..].trim_start_matches('0').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_leading_zeros() {
        assert_eq!(normalize_selection("007", 3), "7");
        assert_eq!(normalize_selection("000", 3), "");
    }

    #[test]
    fn normalize_keeps_most_recent_digits() {
        assert_eq!(normalize_selection("1234", 2), "34");
        assert_eq!(normalize_selection("1204", 2), "4");
    }

    #[test]
    fn key_payload_must_be_a_digit() {
        let err = GoToPageReducer::decode("go_to_page_key", ActionValue::Number(12)).unwrap_err();
        assert!(matches!(err, ActionError::InvalidPayload { expected: "digit", .. }));
    }
}
