mod common;

use canute_ui::actions;
use canute_ui::state::{AppState, Location, TaskFlag};
use canute_ui::ui::buttons::{Bindings, ButtonPress, PressKind};
use canute_ui::ui::system_menu::{menu_entries, FIRST_MENU_BUTTON};
use common::{book, spawn_store, state_with_books};

#[test]
fn unbound_presses_are_skipped_in_order() {
    let bindings = Bindings::standard();
    let presses = vec![
        ButtonPress::single(">"),
        ButtonPress::single("9"),
        ButtonPress::new("1", PressKind::Double),
        ButtonPress::single("L"),
    ];
    let resolved = bindings.resolve(Location::Book, &presses);
    assert_eq!(resolved, vec![actions::next_page(), actions::go_to_library()]);
}

#[test]
fn long_presses_skip_ten_pages_in_book() {
    let bindings = Bindings::standard();
    assert_eq!(
        bindings.lookup(Location::Book, PressKind::Long, ">"),
        Some(&actions::skip_pages(10))
    );
    assert_eq!(
        bindings.lookup(Location::Book, PressKind::Long, "<"),
        Some(&actions::skip_pages(-10))
    );
    assert_eq!(bindings.lookup(Location::Library, PressKind::Long, ">"), None);
}

#[test]
fn library_rows_select_books() {
    let bindings = Bindings::standard();
    assert_eq!(
        bindings.lookup(Location::Library, PressKind::Single, "2"),
        Some(&actions::go_to_book(0))
    );
    assert_eq!(
        bindings.lookup(Location::Library, PressKind::Single, "9"),
        Some(&actions::go_to_book(7))
    );
    assert_eq!(bindings.lookup(Location::Library, PressKind::Single, "1"), None);
}

#[test]
fn system_menu_entries_are_bound_from_button_two() {
    let bindings = Bindings::standard();
    for (i, entry) in menu_entries().into_iter().enumerate() {
        let button = (i + FIRST_MENU_BUTTON).to_string();
        assert_eq!(
            bindings.lookup(Location::SystemMenu, PressKind::Single, &button),
            Some(&entry.action),
            "{}",
            entry.title
        );
    }
    assert_eq!(
        bindings.lookup(Location::SystemMenu, PressKind::Single, "R"),
        Some(&actions::reset_display(TaskFlag::InProgress))
    );
}

#[test]
fn go_to_page_keypad() {
    let bindings = Bindings::standard();
    assert_eq!(
        bindings.lookup(Location::GoToPage, PressKind::Single, ">"),
        Some(&actions::go_to_page_key(0))
    );
    assert_eq!(
        bindings.lookup(Location::GoToPage, PressKind::Single, "5"),
        Some(&actions::go_to_page_key(5))
    );
    assert_eq!(
        bindings.lookup(Location::GoToPage, PressKind::Single, "R"),
        Some(&actions::go_to_page_confirm())
    );
}

#[tokio::test]
async fn presses_drive_the_store() {
    let bindings = Bindings::standard();
    let store = spawn_store(state_with_books(vec![book("a", 90), book("b", 90)]));

    let location = store.state().await.expect("state").location;
    assert_eq!(location, Location::Library);
    for action in bindings.resolve(location, &[ButtonPress::single("3")]) {
        store.dispatch(action).await.expect("dispatch");
    }

    let state = store.state().await.expect("state");
    assert_eq!(state.location, Location::Book);
    for action in bindings.resolve(state.location, &[ButtonPress::new(">", PressKind::Long)]) {
        store.dispatch(action).await.expect("dispatch");
    }

    let state: std::sync::Arc<AppState> = store.state().await.expect("state");
    assert_eq!(state.open_book().map(|b| b.title.as_str()), Some("b"));
    assert_eq!(state.open_book().map(|b| b.page), Some(9));
}
