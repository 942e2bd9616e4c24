//! Pokemon List Component
//!
//! Listing view: controls, filtered grid and URL synchronization.
//! The query lives in a signal; every change is written to the URL with
//! `replaceState`. Back/forward navigation re-reads the URL into it.

use leptos::prelude::*;

use super::{AppLink, ListControls, PokemonCard, SkeletonGrid};
use crate::models::ListQuery;
use crate::router::{detail_href, restored_query, use_router, Route};
use crate::store::{use_catalog_store, CatalogStateStoreFields};

#[component]
pub fn PokemonList() -> impl IntoView {
    let router = use_router();
    let store = use_catalog_store();

    let initial = router.location.with_untracked(|l| ListQuery::from_query_string(&l.search));
    let (query, set_query) = signal(initial);

    // URL -> query, on navigation only
    Effect::new(move |_| {
        let location = router.location.get();
        if location.route() != Route::List {
            return;
        }
        if let Some(restored) = query.with_untracked(|q| restored_query(q, &location.search)) {
            web_sys::console::log_1(&format!("[LIST] Restored query from URL: {:?}", location.search).into());
            set_query.set(restored);
        }
    });

    // query -> URL
    Effect::new(move |_| {
        let search = query.with(ListQuery::to_query_string);
        router.replace_search(&search);
    });

    let results = Memo::new(move |_| query.with(|q| store.pokemon().with(|all| q.apply(all))));

    view! {
        <div class="pokemon-list">
            <ListControls query=query set_query=set_query />

            {move || store.error().get().map(|message| view! {
                <div class="error-banner" role="alert">
                    {format!("Could not load the Pokédex: {}", message)}
                </div>
            })}

            <Show
                when=move || store.loaded().get()
                fallback=|| view! { <SkeletonGrid /> }
            >
                <p class="result-count">{move || format!("{} Pokémon", results.with(Vec::len))}</p>
                <Show
                    when=move || results.with(|r| !r.is_empty())
                    fallback=|| view! {
                        <div class="empty-state">
                            <p>"No Pokémon match your criteria."</p>
                        </div>
                    }
                >
                    <div class="pokemon-grid">
                        <For
                            each=move || results.get()
                            key=|p| p.number
                            children=move |pokemon| view! {
                                <AppLink href=detail_href(&pokemon) class="card-link">
                                    <PokemonCard pokemon=pokemon />
                                </AppLink>
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
