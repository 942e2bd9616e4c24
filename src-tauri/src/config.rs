//! Catalog Configuration
//!
//! Where the Record Store lives. Paths default to the app data directory and
//! can be overridden from the environment:
//! - `POKEDEX_DB_PATH`: SQLite database file
//! - `POKEDEX_EXPORT_PATH`: JSON export used as fallback source

use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "pokedex.db";
pub const EXPORT_FILE_NAME: &str = "pokedex_export.json";

const DB_PATH_ENV: &str = "POKEDEX_DB_PATH";
const EXPORT_PATH_ENV: &str = "POKEDEX_EXPORT_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub db_path: PathBuf,
    /// On-disk export checked before the embedded copy
    pub export_path: PathBuf,
}

impl CatalogConfig {
    /// Defaults under `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            export_path: data_dir.join(EXPORT_FILE_NAME),
        }
    }

    /// Defaults under `data_dir`, then environment overrides
    pub fn load(data_dir: &Path) -> Self {
        Self::in_dir(data_dir).with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(DB_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("Override db_path from env: {}", path);
            self.db_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(EXPORT_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("Override export_path from env: {}", path);
            self.export_path = PathBuf::from(path);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_in_data_dir() {
        let config = CatalogConfig::in_dir(Path::new("/data/app"));
        assert_eq!(config.db_path, PathBuf::from("/data/app/pokedex.db"));
        assert_eq!(config.export_path, PathBuf::from("/data/app/pokedex_export.json"));
    }

    #[test]
    fn test_env_overrides() {
        let config = CatalogConfig::in_dir(Path::new("/data/app")).with_overrides(|key| match key {
            "POKEDEX_DB_PATH" => Some("/tmp/other.db".to_string()),
            "POKEDEX_EXPORT_PATH" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.db_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.export_path, PathBuf::from("/data/app/pokedex_export.json"));
    }
}
