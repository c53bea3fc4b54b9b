//! Route components for the five resource lists.
//!
//! Each is a one-liner over the generic view; behaviour differences live in
//! the `Resource` impls under `crate::resources`.

use leptos::prelude::*;

use crate::components::resource_list::resource_list_view;
use crate::net::types::{Game, Genre, Manufacturer, Platform, User};

/// `/listgeneros`
#[component]
pub fn GenresPage() -> impl IntoView {
    resource_list_view::<Genre>()
}

/// `/listfabricantes`
#[component]
pub fn ManufacturersPage() -> impl IntoView {
    resource_list_view::<Manufacturer>()
}

/// `/listjuegos`
#[component]
pub fn GamesPage() -> impl IntoView {
    resource_list_view::<Game>()
}

/// `/listplataformas`
#[component]
pub fn PlatformsPage() -> impl IntoView {
    resource_list_view::<Platform>()
}

/// `/listusuarios`
#[component]
pub fn UsersPage() -> impl IntoView {
    resource_list_view::<User>()
}
