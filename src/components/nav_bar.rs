//! Category filter buttons.

use leptos::prelude::*;

use crate::state::ui::{Filter, UiState};

/// Nav bar with one button per filter. The clicked button becomes active and
/// the grid shows only tiles whose category it allows.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <nav class="nav-bar">
            {Filter::NAV_ORDER
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            class="nav-btn"
                            class=("nav-btn--active", move || ui.get().active_filter == filter)
                            on:click=move |_| ui.update(|u| u.active_filter = filter)
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
