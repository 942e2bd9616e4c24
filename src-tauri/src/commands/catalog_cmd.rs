//! Tauri Commands for catalog reads
//!
//! Exposes the Record Store and Tag Catalog to the frontend.

use tauri::State;

use pokedex_core::{Catalog, Pokemon, TypeInfo};

use crate::AppState;

/// Full snapshot, loaded once by the frontend at startup
#[tauri::command]
pub async fn get_catalog(state: State<'_, AppState>) -> Result<Catalog, String> {
    state.catalog.load_catalog().await.map_err(|e| {
        log::error!("get_catalog failed: {}", e);
        e.to_string()
    })
}

/// All records ordered by number
#[tauri::command]
pub async fn list_pokemon(state: State<'_, AppState>) -> Result<Vec<Pokemon>, String> {
    state.catalog.list_pokemon().await.map_err(|e| e.to_string())
}

/// All types ordered by id
#[tauri::command]
pub async fn list_types(state: State<'_, AppState>) -> Result<Vec<TypeInfo>, String> {
    state.catalog.list_types().await.map_err(|e| e.to_string())
}

/// Get record by display number
#[tauri::command]
pub async fn get_pokemon(state: State<'_, AppState>, number: u32) -> Result<Option<Pokemon>, String> {
    state.catalog.get_pokemon(number).await.map_err(|e| e.to_string())
}
