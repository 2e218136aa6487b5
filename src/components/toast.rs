//! Transient confirmation banner.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Bottom-corner toast shown briefly after a successful copy.
#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        <Show when=move || toast.get().message.is_some()>
            <div class="toast">{move || toast.get().message.unwrap_or_default()}</div>
        </Show>
    }
}
