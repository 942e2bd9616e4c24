//! List Controls Component
//!
//! Search box, type filter and sort menu driving the listing query.

use leptos::prelude::*;

use crate::models::{ListQuery, SortSpec, TypeInfo};
use crate::store::{use_catalog_store, CatalogStateStoreFields};

/// Search input (name or number)
#[component]
fn SearchInput(query: ReadSignal<ListQuery>, set_query: WriteSignal<ListQuery>) -> impl IntoView {
    view! {
        <div class="control">
            <label for="search">"Search (name / number)"</label>
            <input
                id="search"
                type="text"
                placeholder="Pikachu, 25..."
                prop:value=move || query.with(|q| q.search.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_query.update(|q| q.search = value);
                }
            />
        </div>
    }
}

/// Single type pill in the filter
#[component]
fn TypeFilterOption(
    type_info: TypeInfo,
    query: ReadSignal<ListQuery>,
    set_query: WriteSignal<ListQuery>,
) -> impl IntoView {
    let name = type_info.name.clone();
    let toggle_name = name.clone();
    let is_selected = Memo::new(move |_| query.with(|q| q.types.contains(&name)));
    let dot_style = format!("background-color: {};", type_info.css_color());

    view! {
        <button
            class=move || if is_selected.get() { "type-filter-option selected" } else { "type-filter-option" }
            aria-pressed=move || is_selected.get().to_string()
            on:click=move |_| set_query.update(|q| q.toggle_type(&toggle_name))
        >
            <span class="type-dot" style=dot_style></span>
            {type_info.name}
        </button>
    }
}

/// Multi-select type filter; every selected type is required
#[component]
fn TypeFilter(query: ReadSignal<ListQuery>, set_query: WriteSignal<ListQuery>) -> impl IntoView {
    let store = use_catalog_store();
    let selected_count = move || query.with(|q| q.types.len());

    view! {
        <div class="control type-filter">
            <span class="control-label">
                {move || match selected_count() {
                    0 => "Types".to_string(),
                    n => format!("Types ({} selected)", n),
                }}
            </span>
            <div class="type-filter-options">
                <For
                    each=move || store.types().get()
                    key=|t| t.id
                    children=move |t| view! { <TypeFilterOption type_info=t query=query set_query=set_query /> }
                />
            </div>
            <Show when=move || { selected_count() > 0 }>
                <button class="type-filter-reset" on:click=move |_| set_query.update(|q| q.types.clear())>
                    "Reset types"
                </button>
            </Show>
        </div>
    }
}

/// Sort menu with the fixed option list
#[component]
fn SortSelect(query: ReadSignal<ListQuery>, set_query: WriteSignal<ListQuery>) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        if let Some(sort) = SortSpec::parse(&event_target_value(&ev)) {
            set_query.update(|q| q.sort = sort);
        }
    };

    view! {
        <div class="control">
            <label for="sort">"Sort by"</label>
            <select id="sort" on:change=on_change>
                {SortSpec::ALL_OPTIONS.into_iter().map(|(spec, label)| {
                    let selected = move || query.with(|q| q.sort == spec);
                    view! { <option value=spec.as_param() prop:selected=selected>{label}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn ListControls(query: ReadSignal<ListQuery>, set_query: WriteSignal<ListQuery>) -> impl IntoView {
    view! {
        <div class="list-controls">
            <SearchInput query=query set_query=set_query />
            <TypeFilter query=query set_query=set_query />
            <SortSelect query=query set_query=set_query />
        </div>
    }
}
