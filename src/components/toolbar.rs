//! Page header: title, copy-page-link action, theme toggle.

use leptos::prelude::*;

use crate::state::toast::ToastState;
use crate::state::ui::UiState;

/// How long the copy confirmation stays on screen.
#[cfg(feature = "csr")]
const TOAST_MILLIS: u64 = 1800;

/// Header toolbar.
///
/// The copy button writes the current page url to the clipboard and flashes
/// a toast; when the write fails it falls back to a manual-copy prompt. The
/// theme button flips between dark and light, labeled with the theme it
/// would switch to.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toast = expect_context::<RwSignal<ToastState>>();

    let on_toggle_theme = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let on_copy = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let Some(url) = crate::util::clipboard::page_url() else {
                    return;
                };
                if crate::util::clipboard::copy_text(&url).await {
                    let seq = toast
                        .try_update(|t| t.show("Main link copied!"))
                        .unwrap_or_default();
                    gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_MILLIS)).await;
                    toast.update(|t| t.dismiss(seq));
                } else {
                    crate::util::clipboard::manual_copy_prompt(&url);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = toast;
        }
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__title">"Launcher"</span>
            <span class="toolbar__spacer"></span>
            <button class="btn toolbar__copy-link" on:click=on_copy title="Copy the page link">
                "Make A Link"
            </button>
            <button class="btn toolbar__theme-toggle" on:click=on_toggle_theme title="Toggle theme">
                {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
            </button>
        </header>
    }
}
