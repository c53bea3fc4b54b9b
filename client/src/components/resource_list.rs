//! Generic resource list view: fetch once, then table + detail modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list page mounts `resource_list_view::<R>()`. On mount (after
//! hydration) it spawns exactly one collection fetch. The result is written
//! into view state only while the view's `ViewLifetime` is active, so a
//! response that lands after navigation away is dropped.

use leptos::prelude::*;

use crate::components::data_table::data_table;
use crate::components::detail_modal::detail_modal;
use crate::resources::Resource;
use crate::state::list_view::{ListViewState, LoadStatus};
use crate::util::lifetime::ViewLifetime;

/// Loading → table | error view for resource `R`.
pub fn resource_list_view<R: Resource>() -> impl IntoView {
    let config = R::CONFIG;
    let state = RwSignal::new(ListViewState::<R>::new());
    let lifetime = ViewLifetime::new();

    #[cfg(feature = "hydrate")]
    {
        let task_lifetime = lifetime.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_collection::<R>(config.endpoint).await;
            match &result {
                Ok(records) => log::debug!("fetched {} records from {}", records.len(), config.endpoint),
                Err(e) => leptos::logging::warn!("fetch {} failed: {e}", config.endpoint),
            }
            let delivered = task_lifetime.deliver(|| {
                state.update(|s| {
                    s.resolve(result);
                });
            });
            if !delivered {
                log::debug!("discarded {} response after unmount", config.endpoint);
            }
        });
    }

    on_cleanup(move || lifetime.end());

    let status = Memo::new(move |_| state.with(ListViewState::status));

    view! {
        <section class="resource-list">
            {move || match status.get() {
                LoadStatus::Loading => {
                    view! {
                        <div class="resource-list__loading">
                            <div class="spinner" role="status">
                                <span class="visually-hidden">"Loading..."</span>
                            </div>
                            <p>{config.loading_message}</p>
                        </div>
                    }
                        .into_any()
                }
                LoadStatus::Errored => {
                    view! {
                        <div class="resource-list__error">
                            <h4>{config.error_heading}</h4>
                            <p>{move || state.with(|s| s.error().unwrap_or_default().to_owned())}</p>
                        </div>
                    }
                        .into_any()
                }
                LoadStatus::Loaded => {
                    view! {
                        <h4 class="resource-list__title">{config.title}</h4>
                        <div class="card">{data_table(state)}</div>
                        {detail_modal(state)}
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
