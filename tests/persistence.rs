mod common;

use common::{store, viewer_in};
use refdoc::domain::FontSize;
use refdoc::storage::{KeyValueStore, BOOKMARKS_KEY};
use refdoc::Event;

#[test]
fn bookmarks_and_preferences_survive_restart() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut state = viewer_in(dir.path());
    state.go_to_result(3, 0);
    state.toggle_bookmark();
    state.go_to_result(4, 2);
    state.toggle_bookmark();
    refdoc::handle_event(&mut state, &Event::ToggleDarkMode).expect("handled");
    refdoc::handle_event(&mut state, &Event::CycleFontSize).expect("handled");
    drop(state);

    let reloaded = viewer_in(dir.path());
    let ids: Vec<&str> = reloaded.bookmarks().list().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["3-0", "4-2"]);
    assert!(reloaded.preferences().dark_mode);
    assert_eq!(reloaded.preferences().font_size, FontSize::Large);
    assert_eq!(reloaded.theme().name, "catppuccin-mocha");
}

#[test]
fn stores_do_not_overwrite_each_other() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut state = viewer_in(dir.path());
    state.go_to_result(0, 0);
    state.toggle_bookmark();
    state.toggle_dark_mode();

    assert!(dir.path().join("bookmarks.json").exists());
    assert!(dir.path().join("preferences.json").exists());
    let saved = store(dir.path()).get(BOOKMARKS_KEY).expect("read").expect("present");
    assert!(saved.contains("\"0-0\""));
}

#[test]
fn corrupt_files_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("bookmarks.json"), "{not json").expect("write");
    std::fs::write(dir.path().join("preferences.json"), "[1, 2]").expect("write");

    let state = viewer_in(dir.path());
    assert!(state.bookmarks().is_empty());
    assert!(!state.preferences().dark_mode);
}
