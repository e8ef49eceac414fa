use super::Component;
use super::result_list::ResultList;
use crate::picker::domain::models::FileHit;
use crate::picker::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: crossterm::event::KeyEventKind::Press,
        state: crossterm::event::KeyEventState::empty(),
    }
}

fn hit(path: &str) -> FileHit {
    FileHit {
        id: Some(path.to_string()),
        path: Some(path.to_string()),
        mime: Some("text/plain".to_string()),
        ..FileHit::default()
    }
}

#[test]
fn test_navigation_moves_highlight() {
    let mut list = ResultList::new();
    list.set_hits(vec![hit("/a"), hit("/b"), hit("/c")]);
    list.set_selected_index(0);

    let msg = list.handle_key(key(KeyCode::Down));
    assert!(matches!(msg, Some(Message::HighlightResult(1))));

    let msg = list.handle_key(key(KeyCode::Down));
    assert!(matches!(msg, Some(Message::HighlightResult(2))));

    // At the bottom, no further movement
    assert!(list.handle_key(key(KeyCode::Down)).is_none());

    let msg = list.handle_key(key(KeyCode::Up));
    assert!(matches!(msg, Some(Message::HighlightResult(1))));
}

#[test]
fn test_navigation_skips_loading_rows() {
    let mut list = ResultList::new();
    list.set_hits(vec![
        hit("/a"),
        FileHit::placeholder("Waiting for results ..."),
        hit("/c"),
    ]);
    list.set_selected_index(0);

    let msg = list.handle_key(key(KeyCode::Down));
    assert!(matches!(msg, Some(Message::HighlightResult(2))));

    let msg = list.handle_key(key(KeyCode::Up));
    assert!(matches!(msg, Some(Message::HighlightResult(0))));
}

#[test]
fn test_home_lands_on_first_selectable() {
    let mut list = ResultList::new();
    list.set_hits(vec![
        FileHit::placeholder("Waiting for results ..."),
        hit("/a"),
        hit("/b"),
    ]);
    list.set_selected_index(2);

    let msg = list.handle_key(key(KeyCode::Home));
    assert!(matches!(msg, Some(Message::HighlightResult(1))));
}

#[test]
fn test_end_and_page_navigation() {
    let mut list = ResultList::new();
    list.set_hits((0..30).map(|i| hit(&format!("/f{i}"))).collect());
    list.set_selected_index(0);

    let msg = list.handle_key(key(KeyCode::PageDown));
    assert!(matches!(msg, Some(Message::HighlightResult(10))));

    let msg = list.handle_key(key(KeyCode::End));
    assert!(matches!(msg, Some(Message::HighlightResult(29))));

    let msg = list.handle_key(key(KeyCode::PageUp));
    assert!(matches!(msg, Some(Message::HighlightResult(19))));
}

#[test]
fn test_enter_activates() {
    let mut list = ResultList::new();
    list.set_hits(vec![hit("/a")]);
    assert!(matches!(
        list.handle_key(key(KeyCode::Enter)),
        Some(Message::Activate)
    ));
}

#[test]
fn test_empty_list_navigation_is_inert() {
    let mut list = ResultList::new();
    assert!(list.handle_key(key(KeyCode::Down)).is_none());
    assert!(list.handle_key(key(KeyCode::Up)).is_none());
    assert!(list.handle_key(key(KeyCode::End)).is_none());
}
