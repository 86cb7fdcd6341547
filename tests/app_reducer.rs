mod common;

use canute_ui::state::{AppState, Dimensions, GoToPageEntry, Listing, Location, TaskFlag};
use canute_ui::ui::app::{AppIntent, AppReducer};
use canute_ui::ui::hardware::{HardwareIntent, HardwareReducer};
use canute_ui::ui::mvi::Reducer;
use common::{book, reading};

fn library_of(lines: usize, page: usize) -> AppState {
    AppState {
        location: Location::Library,
        dimensions: Dimensions::new(40, 9),
        library: Listing {
            data: (0..lines).map(|i| format!("book {i}")).collect(),
            page,
        },
        ..AppState::default()
    }
}

#[test]
fn next_page_stays_on_last_library_page() {
    // 20 lines, capacity 8: pages 0..=2.
    let state = AppReducer::reduce(library_of(20, 2), AppIntent::NextPage);
    assert_eq!(state.library.page, 2);
}

#[test]
fn library_pages_forward_and_back() {
    let state = AppReducer::reduce(library_of(20, 0), AppIntent::NextPage);
    assert_eq!(state.library.page, 1);
    let state = AppReducer::reduce(state, AppIntent::PreviousPage);
    let state = AppReducer::reduce(state, AppIntent::PreviousPage);
    assert_eq!(state.library.page, 0);
}

#[test]
fn book_pages_turn_within_bounds() {
    let state = AppReducer::reduce(reading(54, 4), AppIntent::NextPage);
    assert_eq!(state.open_book().map(|b| b.page), Some(5));
    let state = AppReducer::reduce(state, AppIntent::NextPage);
    assert_eq!(state.open_book().map(|b| b.page), Some(5));
}

#[test]
fn system_menu_round_trip() {
    let state = AppReducer::reduce(reading(10, 0), AppIntent::GoToSystemMenu);
    assert_eq!(state.location, Location::SystemMenu);
    let state = AppReducer::reduce(state, AppIntent::CloseMenu);
    assert_eq!(state.location, Location::Book);
}

#[test]
fn close_menu_clears_page_entry() {
    let state = AppState {
        location: Location::GoToPage,
        go_to_page: GoToPageEntry {
            selection: "12".into(),
            keys_pressed: "012".into(),
        },
        ..AppState::default()
    };
    let state = AppReducer::reduce(state, AppIntent::CloseMenu);
    assert_eq!(state.location, Location::Book);
    assert_eq!(state.go_to_page, GoToPageEntry::default());
}

#[test]
fn backup_log_in_progress_ignores_repeat_and_idle() {
    let mut observed = vec![];
    let mut state = AppState::default();
    observed.push(state.backing_up_log);
    for value in [
        TaskFlag::InProgress,
        TaskFlag::InProgress,
        TaskFlag::Idle,
        TaskFlag::Done,
    ] {
        state = AppReducer::reduce(state, AppIntent::BackupLog(value));
        observed.push(state.backing_up_log);
    }
    assert_eq!(
        observed,
        vec![
            TaskFlag::Idle,
            TaskFlag::InProgress,
            TaskFlag::InProgress,
            TaskFlag::InProgress,
            TaskFlag::Done,
        ]
    );
}

#[test]
fn hardware_flags_share_the_protocol() {
    let state = HardwareReducer::reduce(
        AppState::default(),
        HardwareIntent::ResetDisplay(TaskFlag::InProgress),
    );
    let state = HardwareReducer::reduce(state, HardwareIntent::ResetDisplay(TaskFlag::Idle));
    assert_eq!(state.hardware.resetting_display, TaskFlag::InProgress);
    assert_eq!(state.hardware.warming_up, TaskFlag::Idle);

    let state = HardwareReducer::reduce(state, HardwareIntent::WarmUp(TaskFlag::InProgress));
    let state = HardwareReducer::reduce(state, HardwareIntent::ResetDisplay(TaskFlag::Done));
    assert_eq!(state.hardware.resetting_display, TaskFlag::Done);
    assert_eq!(state.hardware.warming_up, TaskFlag::InProgress);
}

#[test]
fn shutdown_and_update_ui() {
    let state = AppReducer::reduce(AppState::default(), AppIntent::UpdateUi(true));
    assert!(state.update_ui);
    let state = AppReducer::reduce(state, AppIntent::Shutdown);
    assert!(state.shutting_down);
}

#[test]
fn set_dimensions_replaces_size() {
    let state = AppReducer::reduce(
        AppState::default(),
        AppIntent::SetDimensions(Dimensions::new(28, 4)),
    );
    assert_eq!(state.dimensions, Dimensions::new(28, 4));
}

#[test]
fn set_dimensions_reclamps_pages() {
    // 20 books of 90 lines on a 40x9 display: library pages 0..=2,
    // book pages 0..=9. At 40x30 both collapse.
    let mut state = library_of(20, 2);
    state.books = (0..20)
        .map(|i| book(&format!("b{i}"), 90).with_page(9))
        .collect();
    let resized = AppIntent::SetDimensions(Dimensions::new(40, 30));
    let state = AppReducer::reduce(state, resized);
    assert_eq!(state.library.page, 0);
    assert!(state.books.iter().all(|b| b.page == 2));
}
