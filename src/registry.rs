//! Tile registry: the fixed, ordered set of launcher entries.
//!
//! DESIGN
//! ======
//! Tiles are data, not code: the registry lives in `tiles.json` next to this
//! module, is embedded at compile time, and is parsed once on first access.
//! Editing the launcher means editing that file, never this module.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::sync::LazyLock;

/// A single launchable or informational entry in the grid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tile {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub description: String,
    /// External link opened in a new tab. Tiles without one open the modal.
    #[serde(default)]
    pub url: Option<String>,
}

/// Tile category, which is also the unit of nav-bar filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Games,
    Apps,
    Extras,
}

impl Category {
    /// Human-readable label shown on tiles and nav buttons.
    pub fn label(self) -> &'static str {
        match self {
            Self::Games => "Games",
            Self::Apps => "Apps",
            Self::Extras => "Extras",
        }
    }

    /// Lowercase identifier used in markup attributes and the data file.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::Apps => "apps",
            Self::Extras => "extras",
        }
    }
}

/// What clicking a tile does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileAction<'a> {
    /// Open the url in a new browsing context.
    OpenUrl(&'a str),
    /// Show the informational modal for this tile.
    ShowModal,
}

impl Tile {
    /// Decide the click behavior: external open when a url is present,
    /// modal otherwise.
    pub fn action(&self) -> TileAction<'_> {
        match &self.url {
            Some(url) => TileAction::OpenUrl(url),
            None => TileAction::ShowModal,
        }
    }
}

static TILES: LazyLock<Vec<Tile>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("tiles.json")).expect("tiles.json is valid registry data")
});

/// The registry, in declaration order. Parsed once, immutable afterwards.
pub fn tiles() -> &'static [Tile] {
    &TILES
}
