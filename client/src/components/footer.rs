//! Static footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"Game Admin · Panel de administración de videojuegos"</span>
        </footer>
    }
}
