mod common;

use common::viewer;
use refdoc::content::Block;
use refdoc::search::SearchEngine;
use refdoc::storage::MemoryStore;
use refdoc::ui::viewmodel::Body;
use refdoc::{handle_event, initialize, Action, Config, Document, Event, Position, ViewMode, ViewerError};

fn send(state: &mut refdoc::AppState, events: &[Event]) -> Vec<Action> {
    events
        .iter()
        .flat_map(|e| handle_event(state, e).expect("event handled").1)
        .collect()
}

#[test]
fn every_section_is_reachable_by_next_section() {
    let mut state = viewer();
    let chapters: Vec<(usize, usize)> = state
        .document()
        .chapters()
        .iter()
        .map(|c| (c.index, c.sections.len()))
        .collect();

    for (chapter, count) in chapters {
        state.select_chapter(chapter);
        let mut visited = vec![state.cursor().expect("cursor set").section];
        while !state.next_section().is_empty() {
            visited.push(state.cursor().expect("cursor set").section);
        }
        assert_eq!(visited, (0..count).collect::<Vec<_>>());
    }
}

#[test]
fn search_then_open_result_shows_its_section() {
    let mut state = viewer();
    let mut events = vec![Event::SearchMode];
    events.extend("포상".chars().map(Event::Char));
    events.push(Event::Select);
    let actions = send(&mut state, &events);

    let Some(Action::SearchResultsReady { results, .. }) = actions.last() else {
        panic!("no search results event: {actions:?}");
    };
    assert!(!results.is_empty());
    for result in results {
        assert!(state.is_valid(Position::new(result.chapter_index, result.section_index)));
    }

    let first = results[0].clone();
    let actions = send(&mut state, &[Event::Select]);
    assert_eq!(
        state.cursor(),
        Some(Position::new(first.chapter_index, first.section_index))
    );
    assert!(actions.iter().any(|a| matches!(
        a,
        Action::SectionShown { chapter, section, .. }
            if *chapter == first.chapter_index && *section == first.section_index
    )));
}

#[test]
fn results_follow_document_order() {
    let state = viewer();
    let results = SearchEngine::default().search(state.document(), "포상");
    let positions: Vec<(usize, usize)> = results
        .iter()
        .map(|r| (r.chapter_index, r.section_index))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn snippets_highlight_the_query() {
    let state = viewer();
    for result in SearchEngine::default().search(state.document(), "px") {
        for range in &result.snippet.highlights {
            assert!(result.snippet.text[range.clone()].eq_ignore_ascii_case("px"));
        }
    }
}

#[test]
fn shown_section_carries_formatted_blocks() {
    let mut state = viewer();
    let actions = state.go_to_result(3, 0);
    let blocks = actions
        .iter()
        .find_map(|a| match a {
            Action::SectionShown { blocks, .. } => Some(blocks.clone()),
            _ => None,
        })
        .expect("section shown");
    assert!(blocks.iter().any(|b| matches!(b, Block::OrderedList(items) if items.len() == 3)));
}

#[test]
fn bookmark_round_trip_through_keys() {
    let mut state = viewer();
    send(&mut state, &[Event::Select, Event::NextSection, Event::ToggleBookmark]);
    assert!(state.bookmarks().has(0, 1));

    send(&mut state, &[Event::ShowBookmarks]);
    let vm = state.compute_viewmodel(24, 80);
    match vm.body {
        Body::List(list) => assert_eq!(list.items.len(), 1),
        other => panic!("expected bookmark list, got {other:?}"),
    }

    send(&mut state, &[Event::ToggleBookmark]);
    assert!(state.bookmarks().is_empty());
    assert!(matches!(state.compute_viewmodel(24, 80).body, Body::Empty(_)));
}

#[test]
fn escape_walks_back_to_contents() {
    let mut state = viewer();
    send(&mut state, &[Event::KeyDown, Event::Select, Event::ShowBookmarks]);
    send(&mut state, &[Event::Escape]);
    assert_eq!(state.view_mode(), ViewMode::Reading);
    send(&mut state, &[Event::Escape]);
    assert_eq!(state.view_mode(), ViewMode::Welcome);
    assert_eq!(state.cursor(), None);
}

#[test]
fn empty_document_is_rejected() {
    assert!(matches!(Document::from_json("[]"), Err(ViewerError::EmptyDocument)));
    assert!(matches!(Document::from_json("null"), Err(ViewerError::EmptyDocument)));

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "[]").expect("write document");
    let config = Config {
        document_path: Some(path.display().to_string()),
        ..Config::default()
    };
    let err = initialize(&config, Box::new(MemoryStore::new()), Box::new(MemoryStore::new()))
        .expect_err("empty document fails");
    assert!(matches!(err, ViewerError::EmptyDocument));
}

#[test]
fn reading_view_fits_narrow_pane() {
    let mut state = viewer();
    state.go_to_result(4, 2);
    state.set_viewport(20, 30);
    let vm = state.compute_viewmodel(20, 30);
    let Body::Reading(view) = vm.body else {
        panic!("expected reading view");
    };
    assert!(view.lines.iter().all(|l| l.width() + view.margin * 2 <= 30));

    send(&mut state, &[Event::PageDown, Event::PageDown, Event::PageDown]);
    let Body::Reading(view) = state.compute_viewmodel(20, 30).body else {
        panic!("expected reading view");
    };
    assert_eq!(view.progress, 100);
}
