use crate::config::PickerConfig;
use crate::picker::domain::models::FileHit;
use crate::picker::ui::app_state::AppState;
use crate::picker::ui::commands::Command;
use crate::picker::ui::events::Message;

fn state() -> AppState {
    AppState::new(PickerConfig::new(
        "http://files.test/api/search",
        "http://files.test/api/stream",
    ))
}

fn pdf_hit() -> FileHit {
    FileHit {
        id: Some("1".to_string()),
        path: Some("/invoice.pdf".to_string()),
        mime: Some("application/pdf".to_string()),
        ..FileHit::default()
    }
}

#[test]
fn test_short_term_issues_no_query() {
    let mut state = state();
    for q in ["i", "in"] {
        let cmd = state.update(Message::QueryChanged(q.to_string()));
        assert_eq!(cmd, Command::None);
        assert!(state.pending_term().is_none());
    }
}

#[test]
fn test_threshold_term_schedules_debounced_search() {
    let mut state = state();
    let cmd = state.update(Message::QueryChanged("inv".to_string()));
    assert_eq!(cmd, Command::ScheduleSearch(220));
    assert_eq!(state.pending_term().as_deref(), Some("inv"));
}

#[test]
fn test_every_keystroke_restarts_the_timer() {
    // Each qualifying keystroke re-issues ScheduleSearch; the event loop
    // resets its timer on every one, so only the final keystroke fires.
    let mut state = state();
    for q in ["inv", "invo", "invoi"] {
        assert_eq!(
            state.update(Message::QueryChanged(q.to_string())),
            Command::ScheduleSearch(220)
        );
    }
    assert_eq!(state.pending_term().as_deref(), Some("invoi"));
}

#[test]
fn test_shrinking_below_threshold_clears_results() {
    let mut state = state();
    state.update(Message::QueryChanged("inv".to_string()));
    state.search.current_search_id = 1;
    state.update(Message::SearchCompleted {
        id: 1,
        hits: vec![pdf_hit()],
    });
    assert_eq!(state.search.hits.len(), 1);

    state.update(Message::QueryChanged("in".to_string()));
    assert!(state.search.hits.is_empty());
    assert!(state.pending_term().is_none());
}

#[test]
fn test_shrinking_invalidates_in_flight_request() {
    let mut state = state();
    state.update(Message::QueryChanged("inv".to_string()));
    state.search.current_search_id = 1;
    state.search.is_searching = true;

    // The term drops below the minimum while the request is in flight;
    // its late response must not repopulate the cleared list
    state.update(Message::QueryChanged("in".to_string()));
    state.update(Message::SearchCompleted {
        id: 1,
        hits: vec![pdf_hit()],
    });
    assert!(state.search.hits.is_empty());
    assert!(!state.search.is_searching);
}

#[test]
fn test_stale_response_is_discarded() {
    let mut state = state();
    state.search.current_search_id = 5;
    state.update(Message::SearchCompleted {
        id: 4,
        hits: vec![pdf_hit()],
    });
    assert!(state.search.hits.is_empty());

    state.update(Message::SearchCompleted {
        id: 5,
        hits: vec![pdf_hit()],
    });
    assert_eq!(state.search.hits.len(), 1);
}

#[test]
fn test_failed_search_shows_message_and_empty_state() {
    let mut state = state();
    state.search.current_search_id = 1;
    state.search.is_searching = true;
    let cmd = state.update(Message::SearchFailed {
        id: 1,
        error: "connection refused".to_string(),
    });
    assert!(matches!(cmd, Command::ShowMessage(m) if m.contains("connection refused")));
    assert!(state.search.hits.is_empty());
    assert!(!state.search.is_searching);
}

#[test]
fn test_activate_selects_highlighted_hit() {
    let mut state = state();
    state.search.current_search_id = 1;
    state.update(Message::SearchCompleted {
        id: 1,
        hits: vec![pdf_hit()],
    });
    assert!(!state.actions_enabled());

    let cmd = state.update(Message::Activate);
    assert_eq!(cmd, Command::None);
    assert!(state.actions_enabled());
    assert_eq!(state.ui.selection.as_ref().unwrap().label, "1");
}

#[test]
fn test_activate_again_accepts() {
    let mut state = state();
    state.search.current_search_id = 1;
    state.update(Message::SearchCompleted {
        id: 1,
        hits: vec![pdf_hit()],
    });
    state.update(Message::Activate);
    assert_eq!(state.update(Message::Activate), Command::Accept);
}

#[test]
fn test_unselect_disables_actions_and_clears_label() {
    let mut state = state();
    state.search.current_search_id = 1;
    state.update(Message::SearchCompleted {
        id: 1,
        hits: vec![pdf_hit()],
    });
    state.update(Message::Activate);
    assert!(state.actions_enabled());

    state.update(Message::Unselect);
    assert!(!state.actions_enabled());
    assert!(state.ui.selection.is_none());
}

#[test]
fn test_loading_placeholder_is_never_selectable() {
    let mut state = state();
    state.search.current_search_id = 1;
    state.update(Message::SearchCompleted {
        id: 1,
        hits: vec![FileHit::placeholder("Waiting for results ..."), pdf_hit()],
    });
    // Highlight lands on the first selectable row
    assert_eq!(state.search.selected_index, 1);

    state.search.selected_index = 0;
    assert_eq!(state.update(Message::Activate), Command::None);
    assert!(state.ui.selection.is_none());
}

#[test]
fn test_typing_clears_active_selection() {
    let mut state = state();
    state.search.current_search_id = 1;
    state.update(Message::SearchCompleted {
        id: 1,
        hits: vec![pdf_hit()],
    });
    state.update(Message::Activate);
    state.update(Message::QueryChanged("invoices".to_string()));
    assert!(state.ui.selection.is_none());
}

#[test]
fn test_actions_are_noops_without_selection() {
    let mut state = state();
    assert_eq!(state.update(Message::CopyLink), Command::None);
    assert_eq!(state.update(Message::DirectLink), Command::None);
    assert_eq!(state.update(Message::Download), Command::None);
}

#[test]
fn test_actions_use_preview_link_when_selected() {
    let mut state = state();
    state.search.current_search_id = 1;
    state.update(Message::SearchCompleted {
        id: 1,
        hits: vec![pdf_hit()],
    });
    state.update(Message::Activate);

    let cmd = state.update(Message::CopyLink);
    assert_eq!(
        cmd,
        Command::CopyToClipboard("http://files.test/api/stream/1".to_string())
    );
    let cmd = state.update(Message::Download);
    assert!(matches!(cmd, Command::ShowMessage(m) if m.ends_with("/stream/1")));
}
