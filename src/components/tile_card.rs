//! Clickable tile rendered into the launcher grid.

use leptos::prelude::*;

use crate::registry::{Tile, TileAction};
use crate::state::modal::ModalState;
use crate::state::ui::UiState;

/// One grid tile. Clicking either opens the tile's external link in a new
/// tab or shows the detail modal. Filtering hides the element with a class
/// instead of unmounting it, so the grid keeps its full set of children.
#[component]
pub fn TileCard(tile: &'static Tile) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let modal = expect_context::<RwSignal<ModalState>>();

    let hidden = move || !ui.get().active_filter.shows(tile.category);

    let on_click = move |_| match tile.action() {
        TileAction::OpenUrl(url) => crate::util::navigation::open_in_new_tab(url),
        TileAction::ShowModal => modal.update(|m| m.open(tile)),
    };

    view! {
        <button
            class="tile"
            class=("tile--hidden", hidden)
            data-id=tile.id.as_str()
            data-category=tile.category.slug()
            on:click=on_click
        >
            <div class="tile__heading">
                <span class="tile__title">{tile.title.as_str()}</span>
                <span class="tile__meta">{tile.category.label()}</span>
            </div>
            <p class="tile__desc">{tile.description.as_str()}</p>
        </button>
    }
}
