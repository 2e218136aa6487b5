//! Detail modal for tiles without a direct link.

use leptos::prelude::*;

use crate::state::modal::ModalState;

/// Modal showing the open tile's title, description, and category.
///
/// Closes on backdrop click, the explicit close button, or Escape. The
/// parent only mounts this while a tile is open.
#[component]
pub fn TileModal() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    let on_backdrop = move |_| modal.update(ModalState::close);
    let on_close_click = move |_| modal.update(ModalState::close);

    let title = move || modal.get().tile.map(|t| t.title.as_str()).unwrap_or_default();
    let description = move || modal.get().tile.map(|t| t.description.as_str()).unwrap_or_default();
    let category = move || {
        modal
            .get()
            .tile
            .map_or_else(String::new, |t| format!("Category: {}", t.category.label()))
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--tile"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        modal.update(ModalState::close);
                    }
                }
            >
                <h2>{title}</h2>
                <p class="dialog__desc">{description}</p>
                <p class="dialog__meta"><small>{category}</small></p>
                <p class="dialog__hint">
                    <em>"This is a placeholder tile. Give its registry entry a url to open it directly."</em>
                </p>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=on_close_click>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
