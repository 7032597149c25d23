use super::*;

// =============================================================
// Happy path
// =============================================================

#[test]
fn begin_opens_and_marks_loading() {
    let mut state = DetailState::<&str>::default();
    state.begin();
    assert!(state.open);
    assert!(state.loading);
    assert_eq!(state.item, None);
    assert_eq!(state.error, None);
}

#[test]
fn settle_with_ok_stores_the_item() {
    let mut state = DetailState::default();
    let token = state.begin();
    state.settle(token, Ok("post"));
    assert!(!state.loading);
    assert_eq!(state.item, Some("post"));
    assert_eq!(state.error, None);
}

// =============================================================
// Failure keeps the modal usable
// =============================================================

#[test]
fn settle_with_err_keeps_the_modal_open_with_an_error() {
    let mut state = DetailState::<&str>::default();
    let token = state.begin();
    state.settle(token, Err("server returned status 500".to_owned()));
    assert!(state.open);
    assert!(!state.loading);
    assert_eq!(state.item, None);
    assert!(state.error.is_some());
}

#[test]
fn retry_clears_the_previous_error() {
    let mut state = DetailState::default();
    let token = state.begin();
    state.settle(token, Err("boom".to_owned()));
    let token = state.begin();
    assert_eq!(state.error, None);
    state.settle(token, Ok("post"));
    assert_eq!(state.item, Some("post"));
}

// =============================================================
// Stale responses never land
// =============================================================

#[test]
fn a_stale_token_is_ignored() {
    let mut state = DetailState::default();
    let first = state.begin();
    let second = state.begin();
    state.settle(first, Ok("old item"));
    assert!(state.loading, "stale response must not settle the new fetch");
    state.settle(second, Ok("new item"));
    assert_eq!(state.item, Some("new item"));
}

#[test]
fn a_response_after_close_is_ignored() {
    let mut state = DetailState::default();
    let token = state.begin();
    state.close();
    state.settle(token, Ok("orphan"));
    assert!(!state.open);
    assert_eq!(state.item, None);
}

// =============================================================
// Close clears everything
// =============================================================

#[test]
fn close_resets_all_fetch_state() {
    let mut state = DetailState::default();
    let token = state.begin();
    state.settle(token, Ok("post"));
    state.close();
    assert!(!state.open);
    assert!(!state.loading);
    assert_eq!(state.item, None);
    assert_eq!(state.error, None);
}
