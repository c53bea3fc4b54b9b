//! Top bar with the theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="header">
            <span class="header__title">"Panel de administración"</span>
            <span class="header__spacer"></span>
            <button
                class="btn header__theme-toggle"
                type="button"
                title="Cambiar tema"
                on:click=move |_| {
                    let next = dark_mode::toggle(ui.with_untracked(|u| u.theme));
                    ui.update(|u| u.theme = next);
                }
            >
                {move || ui.with(|u| u.theme.toggle_glyph())}
            </button>
        </header>
    }
}
