//! Root application component with shared state contexts.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::launcher::LauncherPage;
use crate::registry;
use crate::state::modal::ModalState;
use crate::state::splash::SplashState;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

/// Root application component.
///
/// Applies the stored theme, provides all shared state contexts, and renders
/// the launcher page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dark_mode = crate::util::dark_mode::read_preference();
    crate::util::dark_mode::apply(dark_mode);

    let ui = RwSignal::new(UiState {
        dark_mode,
        ..UiState::default()
    });
    let modal = RwSignal::new(ModalState::default());
    let splash = RwSignal::new(SplashState::new(registry::tiles().len()));
    let toast = RwSignal::new(ToastState::default());

    provide_context(ui);
    provide_context(modal);
    provide_context(splash);
    provide_context(toast);

    view! {
        <Title text="Tiledeck"/>
        <LauncherPage/>
    }
}
