//! Status tag and generic cell rendering.

use leptos::prelude::*;

use crate::resources::{CellDisplay, StatusTag};

/// Two-state colored tag (`Activo` / `Inactivo`, ...).
#[component]
pub fn StatusBadge(tag: StatusTag) -> impl IntoView {
    view! {
        <span class=format!("status-tag {}", tag.severity.css_modifier())>{tag.label}</span>
    }
}

/// Render formatted cell content as either text or a status tag.
pub fn cell_view(display: CellDisplay) -> AnyView {
    match display {
        CellDisplay::Text(text) => view! { <span>{text}</span> }.into_any(),
        CellDisplay::Tag(tag) => view! { <StatusBadge tag=tag/> }.into_any(),
    }
}
