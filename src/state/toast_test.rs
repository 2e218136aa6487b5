use super::*;

#[test]
fn show_sets_message_and_returns_sequence() {
    let mut state = ToastState::default();
    let seq = state.show("Main link copied!");
    assert_eq!(state.message.as_deref(), Some("Main link copied!"));
    assert_eq!(seq, state.seq);
}

#[test]
fn dismiss_with_current_sequence_clears() {
    let mut state = ToastState::default();
    let seq = state.show("hello");
    state.dismiss(seq);
    assert!(state.message.is_none());
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut state = ToastState::default();
    let first = state.show("first");
    let _second = state.show("second");
    state.dismiss(first);
    assert_eq!(state.message.as_deref(), Some("second"));
}

#[test]
fn sequence_increases_per_show() {
    let mut state = ToastState::default();
    let a = state.show("a");
    let b = state.show("b");
    assert!(b > a);
}
