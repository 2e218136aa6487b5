//! # tiledeck
//!
//! Leptos + WASM launcher page. A fixed registry of tiles is rendered into a
//! grid; clicking a tile opens its external link in a new tab, or an
//! informational modal for tiles without one. A nav bar filters the grid by
//! category, a toolbar offers a copy-page-link action and a light/dark theme
//! toggle, and a splash overlay reports load progress before the grid is
//! shown.
//!
//! The crate builds two ways: with the `csr` feature for the browser (Trunk
//! bundles it as WASM and `start` mounts the app), and without features on
//! the host, where all browser glue degrades to no-ops so the state and
//! registry logic is testable with plain `cargo test`.

pub mod app;
pub mod components;
pub mod pages;
pub mod registry;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logging, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("tiledeck starting with {} tiles", registry::tiles().len());
    leptos::mount::mount_to_body(app::App);
}
