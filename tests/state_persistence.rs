mod common;

use canute_ui::state::persist::persistable;
use canute_ui::state::{AppState, GoToPageEntry, Location, StateFile, TaskFlag};
use common::{book, state_with_books, temp_dir};

fn busy_state() -> AppState {
    let mut state = state_with_books(vec![book("a", 90), book("b", 90)]);
    state.book = 1;
    state.books[1] = state.books[1].with_page(4);
    state.location = Location::GoToPage;
    state.library.page = 1;
    state.home_menu_visible = true;
    state.backing_up_log = TaskFlag::InProgress;
    state.replacing_library = TaskFlag::Done;
    state.go_to_page = GoToPageEntry {
        selection: "3".into(),
        keys_pressed: "03".into(),
    };
    state.hardware.warming_up = TaskFlag::InProgress;
    state.hardware.resetting_display = TaskFlag::InProgress;
    state.shutting_down = true;
    state
}

#[test]
fn round_trip_resets_transient_fields() {
    let dir = temp_dir();
    let file = StateFile::new(dir.path().join("state.json"));
    file.write(&busy_state()).expect("write");

    let restored = file.read();
    assert_eq!(restored.location, Location::Book);
    assert_eq!(restored.library.page, 0);
    assert!(!restored.home_menu_visible);
    assert_eq!(restored.backing_up_log, TaskFlag::Idle);
    assert_eq!(restored.replacing_library, TaskFlag::Idle);
    assert!(restored.go_to_page.is_empty());
    assert_eq!(restored.hardware.warming_up, TaskFlag::Idle);
    assert_eq!(restored.hardware.resetting_display, TaskFlag::Idle);
    assert!(!restored.shutting_down);

    // The reading position survives.
    assert_eq!(restored.book, 1);
    assert_eq!(restored.open_book().map(|b| b.page), Some(4));
    assert_eq!(restored, persistable(&busy_state()));
}

#[test]
fn missing_file_yields_initial_state() {
    let dir = temp_dir();
    let file = StateFile::new(dir.path().join("absent.json"));
    assert_eq!(file.read(), AppState::default());
}

#[test]
fn corrupt_file_yields_initial_state() {
    let dir = temp_dir();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not json").expect("write");
    assert_eq!(StateFile::new(&path).read(), AppState::default());
}

#[test]
fn write_creates_parent_directories() {
    let dir = temp_dir();
    let path = dir.path().join("nested").join("deeper").join("state.json");
    StateFile::new(&path).write(&AppState::default()).expect("write");
    assert!(path.exists());
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn numeric_location_reads_as_book() {
    let mut json = serde_json::to_value(AppState::default()).expect("serialize");
    json["location"] = serde_json::json!(3);
    let state: AppState = serde_json::from_value(json).expect("deserialize");
    assert_eq!(state.location, Location::Book);
}
