//! Read-only detail overlay for the selected record.
//!
//! The record comes from the already-fetched collection; opening the modal
//! never issues a request. Closing clears the selection only.

#[cfg(test)]
#[path = "detail_modal_test.rs"]
mod detail_modal_test;

use leptos::prelude::*;

use crate::components::status_badge::cell_view;
use crate::resources::{Resource, render_cell};
use crate::state::list_view::ListViewState;
use crate::util::currency::CurrencyFormat;

/// Modal shown while `state.selected` points at a loaded record.
pub fn detail_modal<R: Resource>(state: RwSignal<ListViewState<R>>) -> impl IntoView {
    let selected = Memo::new(move |_| state.with(|s| s.selected_record().cloned()));
    let close = move || state.update(|s| s.close_details());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            close();
        }
    };
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    // Focus the dialog whenever it (re)mounts so Escape reaches its handler.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        let _ = dialog.focus();
    });

    move || {
        selected.get().map(|record| {
            let currency = CurrencyFormat::default();
            let fields = record
                .details()
                .into_iter()
                .map(|field| {
                    let display = render_cell(field.format, &field.value, &currency);
                    view! {
                        <div class="detail-field">
                            <strong class="detail-field__label">{field.label} ": "</strong>
                            <span class="detail-field__value">{cell_view(display)}</span>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div class="dialog-backdrop" on:click=move |_| close()>
                    <div
                        class="dialog dialog--detail"
                        role="dialog"
                        aria-modal="true"
                        tabindex="-1"
                        node_ref=dialog_ref
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=on_keydown
                    >
                        <div class="dialog__header">
                            <h2>{R::CONFIG.detail_heading}</h2>
                            <button class="dialog__close" type="button" title="Cerrar" on:click=move |_| close()>
                                "✕"
                            </button>
                        </div>
                        {record.detail_title().map(|title| view! { <h3 class="dialog__title">{title}</h3> })}
                        <div class="dialog__body">{fields}</div>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| close()>
                                "Cerrar"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

/// Keys that close the modal.
fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
