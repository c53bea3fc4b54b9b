//! Sidebar navigation.
//!
//! Links come from the resource registry so a new resource only needs its
//! `Resource` impl and a route. The router marks the current link with
//! `aria-current="page"`, which the stylesheet highlights.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::resources;
use crate::state::ui::UiState;

/// Collapsible left navigation rail.
#[component]
pub fn Aside() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <aside class="aside" class:aside--collapsed=move || ui.with(|u| u.aside_collapsed)>
            <div class="aside__brand">
                <span class="aside__logo" aria-hidden="true">"🎮"</span>
                <span class="aside__title">"Game Admin"</span>
                <button
                    class="aside__toggle"
                    type="button"
                    title="Contraer menú"
                    on:click=move |_| ui.update(UiState::toggle_aside)
                >
                    "☰"
                </button>
            </div>
            <nav class="aside__nav">
                <A href="/dashboard" attr:class="aside__link">
                    "Dashboard"
                </A>
                {resources::ALL
                    .iter()
                    .map(|config| {
                        view! {
                            <A href=config.route attr:class="aside__link">
                                {config.nav_label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
