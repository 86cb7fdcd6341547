mod common;

use canute_ui::actions::{self, Action, ActionError, ActionRegistry, ActionValue};
use canute_ui::state::{AppState, Dimensions, Location};
use canute_ui::store::{DispatchError, Store};
use common::{book, reading, spawn_store, state_with_books};
use std::sync::Arc;

#[tokio::test]
async fn dispatch_sequence_matches_reducers() {
    let store = spawn_store(AppState::default());
    store
        .dispatch(actions::set_books(vec![book("b", 90), book("a", 90)]))
        .await
        .expect("set_books");
    store.dispatch(actions::go_to_book(1)).await.expect("go_to_book");
    let state = store.dispatch(actions::skip_pages(3)).await.expect("skip");

    assert_eq!(state.location, Location::Book);
    assert_eq!(state.open_book().map(|b| b.title.as_str()), Some("b"));
    assert_eq!(state.open_book().map(|b| b.page), Some(3));
}

#[tokio::test]
async fn earlier_snapshots_stay_valid() {
    let store = spawn_store(reading(54, 0));
    let before = store.state().await.expect("state");
    store.dispatch(actions::next_page()).await.expect("next");
    assert_eq!(before.open_book().map(|b| b.page), Some(0));
    let after = store.state().await.expect("state");
    assert_eq!(after.open_book().map(|b| b.page), Some(1));
    assert!(!Arc::ptr_eq(&before, &after));
}

#[tokio::test]
async fn unknown_type_is_an_error() {
    let store = spawn_store(state_with_books(vec![book("a", 9)]));
    let before = store.state().await.expect("state");
    let result = store.dispatch(Action::new("go_to_moon", ActionValue::None)).await;
    assert_eq!(
        result.unwrap_err(),
        DispatchError::UnknownAction {
            action: "go_to_moon".into()
        }
    );
    assert_eq!(*store.state().await.expect("state"), *before);
}

#[tokio::test]
async fn one_row_display_is_refused_and_store_survives() {
    let books = (0..20).map(|i| book(&format!("b{i}"), 5)).collect();
    let store = spawn_store(state_with_books(books));
    store
        .dispatch(actions::go_to_library())
        .await
        .expect("library");
    let err = store
        .dispatch(actions::set_dimensions(Dimensions::new(40, 1)))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DispatchError::Action(ActionError::InvalidPayload { .. })
    ));
    let state = store.dispatch(actions::next_page()).await.expect("next page");
    assert_eq!(state.dimensions, Dimensions::new(40, 9));
    assert_eq!(state.library.page, 1);
}

#[tokio::test]
async fn huge_book_number_keeps_state() {
    let store = spawn_store(state_with_books(vec![book("a", 5), book("b", 5)]));
    let before = store.state().await.expect("state");
    let after = store
        .dispatch(actions::go_to_book(usize::MAX))
        .await
        .expect("go_to_book");
    assert_eq!(*after, *before);
}

#[tokio::test]
async fn trigger_still_publishes() {
    let store = spawn_store(AppState::default());
    let count = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let seen = Arc::clone(&count);
    store
        .subscribe(Box::new(move |_: &Arc<AppState>| {
            seen.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        }))
        .await
        .expect("subscribe");
    store.dispatch(actions::trigger()).await.expect("trigger");
    store.dispatch(actions::trigger()).await.expect("trigger");
    assert_eq!(count.load(std::sync::atomic::Ordering::SeqCst), 2);
}

#[test]
fn sync_store_dispatches_in_order() {
    let registry = ActionRegistry::standard().expect("registry");
    let mut store = Store::new(AppState::default(), registry);
    store.dispatch(actions::go_to_system_menu()).expect("menu");
    store.dispatch(actions::next_page()).expect("next");
    let state = store.dispatch(actions::close_menu()).expect("close");
    assert_eq!(state.location, Location::Book);
    assert!(store.registry().contains("close_menu"));
}
