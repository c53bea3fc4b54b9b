//! Dashboard landing page with one card per resource list.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::resources;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h4 class="home__title">"Dashboard"</h4>
            <div class="home__cards">
                {resources::ALL
                    .iter()
                    .map(|config| {
                        view! {
                            <A href=config.route attr:class="home-card">
                                <span class="home-card__label">{config.nav_label}</span>
                                <span class="home-card__endpoint">{format!("GET {}", config.endpoint)}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Fallback for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <p>"Página no encontrada."</p>
            <A href="/">"Volver al inicio"</A>
        </section>
    }
}
