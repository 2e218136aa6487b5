//! Loading splash overlay.

use leptos::prelude::*;

use crate::state::splash::{SplashPhase, SplashState};

/// Splash overlay with the load-progress label. Fades once loading
/// finishes, unmounts once dismissed.
#[component]
pub fn Splash() -> impl IntoView {
    let splash = expect_context::<RwSignal<SplashState>>();

    view! {
        <Show when=move || !splash.get().hidden()>
            <div
                class="splash"
                class=("splash--fading", move || splash.get().phase == SplashPhase::Loaded)
            >
                <div class="splash__text">{move || splash.get().label()}</div>
            </div>
        </Show>
    }
}
