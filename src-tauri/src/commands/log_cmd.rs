//! Tauri Commands for diagnostics

/// Last lines captured by the rolling logger, oldest first
#[tauri::command]
pub fn get_recent_logs() -> Vec<String> {
    rolling_logger::recent_lines()
}
