use super::*;
use crate::registry::tiles;

#[test]
fn modal_starts_closed() {
    let state = ModalState::default();
    assert!(!state.is_open());
    assert!(state.tile.is_none());
}

#[test]
fn open_then_close_round_trips() {
    let tile = &tiles()[0];
    let mut state = ModalState::default();

    state.open(tile);
    assert!(state.is_open());
    assert_eq!(state.tile.map(|t| t.id.as_str()), Some("t1"));

    state.close();
    assert!(!state.is_open());
}

#[test]
fn opening_a_second_tile_replaces_the_first() {
    let mut state = ModalState::default();
    state.open(&tiles()[0]);
    state.open(&tiles()[2]);
    assert_eq!(state.tile.map(|t| t.id.as_str()), Some("t3"));
}
