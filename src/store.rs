//! Catalog Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Filled once at startup from `get_catalog`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Catalog, Pokemon, TypeInfo};

/// Loaded catalog snapshot with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// All records ordered by number
    pub pokemon: Vec<Pokemon>,
    /// Tag Catalog ordered by id
    pub types: Vec<TypeInfo>,
    /// True once a load attempt finished, successfully or not
    pub loaded: bool,
    /// Last load failure
    pub error: Option<String>,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the snapshot
pub fn store_set_catalog(store: &CatalogStore, catalog: Catalog) {
    store.pokemon().set(catalog.pokemon);
    store.types().set(catalog.types);
    store.error().set(None);
    store.loaded().set(true);
}

/// Record a load failure
pub fn store_set_error(store: &CatalogStore, message: String) {
    store.error().set(Some(message));
    store.loaded().set(true);
}
