#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_preference_defaults_to_dark_off_browser() {
    assert!(read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(!toggle(true));
    assert!(toggle(false));
}

#[test]
fn toggling_twice_restores_the_original_value() {
    for start in [true, false] {
        assert_eq!(toggle(toggle(start)), start);
    }
}

#[test]
fn apply_is_noop_but_callable() {
    apply(true);
    apply(false);
}
