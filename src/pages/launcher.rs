//! The launcher page: toolbar, nav bar, tile grid, modal, splash, toast.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only page. The grid is populated from the static registry in
//! one pass; the splash overlay counts tiles in with a cosmetic stagger and
//! is dismissed once everything is placed.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::splash::Splash;
use crate::components::tile_card::TileCard;
use crate::components::tile_modal::TileModal;
use crate::components::toast::Toast;
use crate::components::toolbar::Toolbar;
use crate::registry;
use crate::state::modal::ModalState;
use crate::state::splash::SplashState;

/// Per-tile stagger while the splash counts the grid in.
#[cfg(feature = "csr")]
const STAGGER_MILLIS: u64 = 60;
/// Pause between the last tile and the "Loaded" label.
#[cfg(feature = "csr")]
const SETTLE_MILLIS: u64 = 600;
/// Fade-out duration before the overlay unmounts.
#[cfg(feature = "csr")]
const FADE_MILLIS: u64 = 300;

/// The launcher page.
#[component]
pub fn LauncherPage() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let splash = expect_context::<RwSignal<SplashState>>();

    // Page scrolling is locked exactly while the modal is open.
    Effect::new(move || {
        crate::util::scroll_lock::set(modal.get().is_open());
    });

    run_splash_sequence(splash);

    view! {
        <div class="launcher-page">
            <Toolbar/>
            <NavBar/>
            <main class="tile-grid">
                {registry::tiles()
                    .iter()
                    .map(|tile| view! { <TileCard tile=tile/> })
                    .collect::<Vec<_>>()}
            </main>
            <Show when=move || modal.get().is_open()>
                <TileModal/>
            </Show>
            <Toast/>
            <Splash/>
        </div>
    }
}

/// Drive the splash through its lifecycle.
///
/// In the browser this runs as a spawned task with cosmetic delays. On the
/// host it resolves synchronously so tests observe the terminal state.
fn run_splash_sequence(splash: RwSignal<SplashState>) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let total = splash.get_untracked().total;
            for _ in 0..total {
                gloo_timers::future::sleep(std::time::Duration::from_millis(STAGGER_MILLIS)).await;
                splash.update(SplashState::advance);
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(SETTLE_MILLIS)).await;
            splash.update(SplashState::finish);
            gloo_timers::future::sleep(std::time::Duration::from_millis(FADE_MILLIS)).await;
            splash.update(SplashState::dismiss);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        splash.update(|s| {
            while s.loaded < s.total {
                s.advance();
            }
            s.finish();
            s.dismiss();
        });
    }
}
