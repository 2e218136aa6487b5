//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the launcher chrome and tile surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod nav_bar;
pub mod splash;
pub mod tile_card;
pub mod tile_modal;
pub mod toast;
pub mod toolbar;
