//! Paginated, sortable, filterable table for a loaded resource collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the `TableState` inside a view's `ListViewState`. Rows
//! come from a memoized `PageView`, so typing in the search box or paging
//! only re-renders the body and paginator, never re-fetches.

use leptos::prelude::*;

use crate::components::status_badge::cell_view;
use crate::resources::{Column, Resource, render_cell};
use crate::state::list_view::ListViewState;
use crate::state::table::{PageRow, PageView, SortDirection};
use crate::util::currency::CurrencyFormat;

/// Table with search header, sortable columns, row actions, and paginator.
pub fn data_table<R: Resource>(state: RwSignal<ListViewState<R>>) -> impl IntoView {
    let config = R::CONFIG;
    let page = Memo::new(move |_| state.with(|s| s.page().map(|p| p.to_view())));
    // Data columns plus the actions column.
    let column_count = (config.columns.len() + 1).to_string();

    view! {
        <div class="data-table">
            <div class="data-table__header">
                {config.toolbar_caption.map(|caption| view! { <h5 class="data-table__caption">{caption}</h5> })}
                <span class="data-table__search">
                    <span class="data-table__search-icon" aria-hidden="true">"⌕"</span>
                    <input
                        class="data-table__search-input"
                        type="search"
                        placeholder=config.search_placeholder
                        prop:value=move || state.with(|s| s.table.filter.clone())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            state.update(|s| s.table.set_filter(text));
                        }
                    />
                </span>
            </div>
            <table class="data-table__table">
                <thead>
                    <tr>
                        {config.columns.iter().map(|column| header_cell(state, *column)).collect_view()}
                        <th class="data-table__cell--center">"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let Some(view) = page.get() else {
                            return ().into_any();
                        };
                        if view.rows.is_empty() {
                            return view! {
                                <tr>
                                    <td class="data-table__empty" colspan=column_count.clone()>
                                        {config.empty_message}
                                    </td>
                                </tr>
                            }
                                .into_any();
                        }
                        view.rows.into_iter().map(|row| body_row(state, row)).collect_view().into_any()
                    }}
                </tbody>
            </table>
            {move || page.get().map(|view| paginator(state, view))}
        </div>
    }
}

fn header_cell<R: Resource>(state: RwSignal<ListViewState<R>>, column: Column) -> impl IntoView {
    let indicator = move || {
        if !column.sortable {
            return "";
        }
        match state.with(|s| s.table.sort_direction(column.field)) {
            Some(SortDirection::Ascending) => " ▲",
            Some(SortDirection::Descending) => " ▼",
            None => " ⇅",
        }
    };
    let on_click = move |_| {
        if column.sortable {
            state.update(|s| s.table.toggle_sort(column.field));
        }
    };

    view! {
        <th
            class:data-table__cell--center=column.centered
            class:data-table__th--sortable=column.sortable
            style=column.width.map(|w| format!("width: {w}"))
            on:click=on_click
        >
            {column.header}
            <span class="data-table__sort-indicator">{indicator}</span>
        </th>
    }
}

fn body_row<R: Resource>(state: RwSignal<ListViewState<R>>, row: PageRow<R>) -> impl IntoView {
    let currency = CurrencyFormat::default();
    let PageRow { index, record } = row;
    let cells = R::CONFIG
        .columns
        .iter()
        .map(|column| {
            let display = render_cell(column.format, &record.field(column.field), &currency);
            view! { <td class:data-table__cell--center=column.centered>{cell_view(display)}</td> }
        })
        .collect_view();

    view! {
        <tr>
            {cells}
            <td class="data-table__actions">
                <button
                    class="btn btn--icon btn--info"
                    type="button"
                    title="Ver detalles"
                    on:click=move |_| {
                        state.update(|s| {
                            s.open_details(index);
                        });
                    }
                >
                    "👁"
                </button>
                {R::CONFIG.edit_delete_placeholders.then(placeholder_actions)}
            </td>
        </tr>
    }
}

/// Edit/delete buttons. Not wired to any endpoint.
fn placeholder_actions() -> impl IntoView {
    view! {
        <button class="btn btn--icon btn--success" type="button" title="Editar">"✎"</button>
        <button class="btn btn--icon btn--danger" type="button" title="Eliminar">"🗑"</button>
    }
}

fn paginator<R: Resource>(state: RwSignal<ListViewState<R>>, view: PageView<R>) -> impl IntoView {
    let page = view.page;
    let last_page = view.page_count.saturating_sub(1);
    let at_first = view.is_first_page();
    let at_last = view.is_last_page();
    let go = move |target: usize| state.update(|s| s.table.set_page(target));

    view! {
        <div class="paginator">
            <button class="paginator__btn" type="button" title="Primera" disabled=at_first on:click=move |_| go(0)>
                "«"
            </button>
            <button
                class="paginator__btn"
                type="button"
                title="Anterior"
                disabled=at_first
                on:click=move |_| go(page.saturating_sub(1))
            >
                "‹"
            </button>
            <span class="paginator__pages">{format!("{} / {}", view.page + 1, view.page_count)}</span>
            <button class="paginator__btn" type="button" title="Siguiente" disabled=at_last on:click=move |_| go(page + 1)>
                "›"
            </button>
            <button class="paginator__btn" type="button" title="Última" disabled=at_last on:click=move |_| go(last_page)>
                "»"
            </button>
            <select
                class="paginator__size"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        state.update(|s| s.table.set_page_size(size));
                    }
                }
            >
                {R::CONFIG
                    .page_size_options
                    .iter()
                    .map(|&size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || state.with(|s| s.table.page_size == size)
                            >
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <span class="paginator__report">{view.report()}</span>
        </div>
    }
}
