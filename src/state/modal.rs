//! Detail-modal state for tiles without a direct link.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::registry::Tile;

/// Which tile, if any, the detail modal is showing.
///
/// Holds a `&'static` reference because the registry is immutable and lives
/// for the whole program.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModalState {
    pub tile: Option<&'static Tile>,
}

impl ModalState {
    pub fn open(&mut self, tile: &'static Tile) {
        self.tile = Some(tile);
    }

    pub fn close(&mut self) {
        self.tile = None;
    }

    pub fn is_open(&self) -> bool {
        self.tile.is_some()
    }
}
