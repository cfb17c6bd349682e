use super::*;
use serde_json::json;

fn placeholder() -> Vec<Space> {
    vec![json!({})]
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_holds_single_empty_record() {
    let state = SpacesState::default();
    assert_eq!(state.items, placeholder());
    assert_eq!(state.refresh_count, 0);
    assert_eq!(state.requests_issued, 0);
    assert_eq!(state.status, FetchStatus::Idle);
    assert!(state.is_loading());
    assert_eq!(state.error_message(), None);
}

// =============================================================
// Success / failure
// =============================================================

#[test]
fn success_replaces_list_and_counts_once() {
    let mut state = SpacesState::default();
    let request = state.begin_fetch();
    assert!(state.apply_success(request, vec![json!({ "id": 1, "name": "Home" })]));
    assert_eq!(state.items, vec![json!({ "id": 1, "name": "Home" })]);
    assert_eq!(state.refresh_count, 1);
    assert_eq!(state.status, FetchStatus::Loaded);
    assert!(!state.is_loading());
}

#[test]
fn empty_success_still_counts() {
    let mut state = SpacesState::default();
    let request = state.begin_fetch();
    assert!(state.apply_success(request, Vec::new()));
    assert!(state.items.is_empty());
    assert_eq!(state.refresh_count, 1);
}

#[test]
fn failure_keeps_placeholder_and_counter() {
    let mut state = SpacesState::default();
    let request = state.begin_fetch();
    assert!(state.apply_failure(request, FetchError::Network("connection refused".into())));
    assert_eq!(state.items, placeholder());
    assert_eq!(state.refresh_count, 0);
    assert_eq!(state.status, FetchStatus::Failed(FetchError::Network("connection refused".into())));
    assert_eq!(state.error_message().as_deref(), Some("network error: connection refused"));
    assert!(!state.is_loading());
}

#[test]
fn failure_after_success_keeps_previous_list() {
    let mut state = SpacesState::default();
    let first = state.begin_fetch();
    state.apply_success(first, vec![json!({ "name": "a" })]);
    let second = state.begin_fetch();
    state.apply_outcome(second, Err(FetchError::Status(500)));
    assert_eq!(state.items, vec![json!({ "name": "a" })]);
    assert_eq!(state.refresh_count, 1);
}

#[test]
fn sequential_fetches_count_twice() {
    let mut state = SpacesState::default();
    let first = state.begin_fetch();
    state.apply_outcome(first, Ok(vec![json!({ "name": "a" })]));
    let second = state.begin_fetch();
    state.apply_outcome(second, Ok(vec![json!({ "name": "a" }), json!({ "name": "b" })]));
    assert_eq!(state.refresh_count, 2);
    assert_eq!(state.requests_issued, 2);
    assert_eq!(state.items.len(), 2);
}

// =============================================================
// Request ordering
// =============================================================

#[test]
fn superseded_response_is_dropped() {
    let mut state = SpacesState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();

    assert!(state.apply_success(second, vec![json!({ "name": "new" })]));
    assert!(!state.apply_success(first, vec![json!({ "name": "old" })]));

    assert_eq!(state.items, vec![json!({ "name": "new" })]);
    assert_eq!(state.refresh_count, 1);
}

#[test]
fn superseded_failure_does_not_mark_page_failed() {
    let mut state = SpacesState::default();
    let first = state.begin_fetch();
    let _second = state.begin_fetch();
    assert!(!state.apply_failure(first, FetchError::Status(503)));
    assert_eq!(state.status, FetchStatus::Loading);
}

#[test]
fn never_issued_requests_are_stale() {
    let state = SpacesState::default();
    assert!(state.is_stale(0));
    assert!(state.is_stale(1));
}

#[test]
fn counter_never_decreases() {
    let mut state = SpacesState::default();
    let mut last = state.refresh_count;
    for round in 0..6 {
        let request = state.begin_fetch();
        let outcome = if round % 2 == 0 { Ok(Vec::new()) } else { Err(FetchError::Status(500)) };
        state.apply_outcome(request, outcome);
        assert!(state.refresh_count >= last);
        last = state.refresh_count;
    }
    assert_eq!(state.refresh_count, 3);
}
