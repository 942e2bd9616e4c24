//! Pokédex Backend
//!
//! Layered architecture:
//! - domain: Identity and lookup rules over the core catalog types
//! - repository: SQLite Record Store / Tag Catalog and the JSON export
//! - catalog: Snapshot assembly with database-first, export-fallback loading
//! - commands: Tauri command handlers

use tauri::Manager;

mod catalog;
mod commands;
mod config;
mod domain;
mod repository;

use catalog::CatalogService;
use config::CatalogConfig;
use repository::{init_db, DbState};

/// Application state shared across commands
pub struct AppState {
    pub catalog: CatalogService,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "Pokedex")?;

            let data_dir = app_handle.path().app_data_dir()?;
            std::fs::create_dir_all(&data_dir)?;
            let config = CatalogConfig::load(&data_dir);
            log::info!("App setup starting, database at {}", config.db_path.display());

            // Commands fall back to the export until the connection is filled in
            let db_state = DbState::new();
            app.manage(AppState {
                catalog: CatalogService::new(db_state.clone(), config.clone()),
            });

            tauri::async_runtime::spawn(async move {
                match init_db(&config.db_path).await {
                    Ok(initialized) => {
                        let conn = initialized.conn.lock().await.take();
                        *db_state.conn.lock().await = conn;
                        let _ = rolling_logger::info("Background: DB initialized");
                    }
                    Err(e) => {
                        let _ = rolling_logger::error(&format!("Background: DB init failed: {}", e));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_catalog,
            commands::list_pokemon,
            commands::list_types,
            commands::get_pokemon,
            commands::get_recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
