use super::*;

#[test]
fn new_splash_is_loading_from_zero() {
    let state = SplashState::new(5);
    assert_eq!(state.phase, SplashPhase::Loading);
    assert_eq!(state.label(), "Loading 0/5");
    assert!(!state.hidden());
}

#[test]
fn advance_counts_each_tile() {
    let mut state = SplashState::new(3);
    state.advance();
    assert_eq!(state.label(), "Loading 1/3");
    state.advance();
    state.advance();
    assert_eq!(state.label(), "Loading 3/3");
}

#[test]
fn advance_saturates_at_total() {
    let mut state = SplashState::new(1);
    state.advance();
    state.advance();
    assert_eq!(state.loaded, 1);
}

#[test]
fn finish_switches_label_to_loaded() {
    let mut state = SplashState::new(2);
    state.advance();
    state.advance();
    state.finish();
    assert_eq!(state.phase, SplashPhase::Loaded);
    assert_eq!(state.label(), "Loaded");
    assert!(!state.hidden());
}

#[test]
fn dismiss_only_applies_after_finish() {
    let mut state = SplashState::new(2);
    state.dismiss();
    assert_eq!(state.phase, SplashPhase::Loading);

    state.finish();
    state.dismiss();
    assert!(state.hidden());
}
