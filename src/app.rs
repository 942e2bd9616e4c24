//! Pokédex Frontend App
//!
//! Root component: provides display settings, router and catalog store,
//! loads the catalog once and switches views on the current route.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{AppLink, LowSpecToggle, NotFound, PokemonDetail, PokemonList, ThemeToggle};
use crate::context::DisplaySettings;
use crate::router::{Location, Route, Router};
use crate::store::{store_set_catalog, store_set_error, CatalogState};
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    let settings = DisplaySettings::new(theme::load_theme());
    provide_context(settings);

    let router = Router::new();
    router.listen_popstate();
    provide_context(router);

    let store = Store::new(CatalogState::default());
    provide_context(store);

    Effect::new(move |_| theme::apply_theme(settings.theme.get()));
    theme::watch_system_theme(settings.theme);

    // Load the catalog once
    spawn_local(async move {
        match commands::get_catalog().await {
            Ok(catalog) => {
                web_sys::console::log_1(
                    &format!("[APP] Loaded {} pokemon, {} types", catalog.pokemon.len(), catalog.types.len()).into(),
                );
                store_set_catalog(&store, catalog);
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("[APP] Failed to load catalog: {}", e).into());
                store_set_error(&store, e);
            }
        }
    });

    let route = Memo::new(move |_| router.location.with(Location::route));

    view! {
        <div class="app-shell">
            <header class="app-header">
                <AppLink href=Route::List.href() class="app-title">
                    <h1>"Pokédex"</h1>
                </AppLink>
                <ThemeToggle />
            </header>

            <main class="app-main">
                {move || match route.get() {
                    Route::List => view! { <PokemonList /> }.into_any(),
                    Route::Detail(number) => view! { <PokemonDetail number=number /> }.into_any(),
                    Route::NotFound => view! { <NotFound /> }.into_any(),
                }}
            </main>

            <LowSpecToggle />
        </div>
    }
}
