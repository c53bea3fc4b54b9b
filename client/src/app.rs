//! Root application component with routing and the shell layout.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{aside::Aside, footer::Footer, header::Header};
use crate::pages::home::{HomePage, NotFoundPage};
use crate::pages::lists::{GamesPage, GenresPage, ManufacturersPage, PlatformsPage, UsersPage};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shell UI state and maps routes to views. Each list route mounts
/// a fresh view, so its fetch and client-local state start over on every
/// navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Runs in the browser only; SSR always renders the light theme.
    Effect::new(move || {
        let theme = dark_mode::read_preference();
        dark_mode::apply(theme);
        ui.update(|u| u.theme = theme);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard.css"/>
        <Title text="Game Admin"/>

        <Router>
            <div class="wrapper" class:wrapper--aside-collapsed=move || ui.with(|u| u.aside_collapsed)>
                <Aside/>
                <div class="content">
                    <Header/>
                    <main class="app">
                        <Routes fallback=NotFoundPage>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("dashboard") view=HomePage/>
                            <Route path=StaticSegment("listgeneros") view=GenresPage/>
                            <Route path=StaticSegment("listfabricantes") view=ManufacturersPage/>
                            <Route path=StaticSegment("listjuegos") view=GamesPage/>
                            <Route path=StaticSegment("listplataformas") view=PlatformsPage/>
                            <Route path=StaticSegment("listusuarios") view=UsersPage/>
                        </Routes>
                    </main>
                    <Footer/>
                </div>
            </div>
        </Router>
    }
}
