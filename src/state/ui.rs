//! Local UI chrome state: theme and the active category filter.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::registry::Category;

/// UI state for the theme toggle and the nav-bar filter.
#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
    pub active_filter: Filter,
}

impl Default for UiState {
    fn default() -> Self {
        // The page is dark by default; "light" is the override.
        Self {
            dark_mode: true,
            active_filter: Filter::All,
        }
    }
}

/// Nav-bar filter selection: everything, or a single category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Games,
    Apps,
    Extras,
}

impl Filter {
    /// Nav-bar button order.
    pub const NAV_ORDER: [Self; 4] = [Self::All, Self::Games, Self::Apps, Self::Extras];

    /// The category this filter narrows to, or `None` for `All`.
    pub fn category(self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Games => Some(Category::Games),
            Self::Apps => Some(Category::Apps),
            Self::Extras => Some(Category::Extras),
        }
    }

    /// Whether tiles of `category` are visible under this filter.
    pub fn shows(self, category: Category) -> bool {
        self.category().map_or(true, |c| c == category)
    }

    /// Button label in the nav bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Games => "Games",
            Self::Apps => "Apps",
            Self::Extras => "Extras",
        }
    }
}
