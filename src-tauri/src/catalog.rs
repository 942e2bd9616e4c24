//! Catalog Service
//!
//! Assembles a validated [`Catalog`] snapshot for the commands layer.
//! The database is the primary source; while it is not initialized, is
//! empty, or fails, the JSON export is used instead. Every command answers
//! from one such snapshot, so they never disagree about the source.

use pokedex_core::{validate_catalog, Catalog, Pokemon, TypeInfo};

use crate::config::CatalogConfig;
use crate::domain::{ensure_catalog_number, DomainError, DomainResult};
use crate::repository::{read_catalog, DbState, PokedexExport};

#[derive(Clone)]
pub struct CatalogService {
    db: DbState,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(db: DbState, config: CatalogConfig) -> Self {
        Self { db, config }
    }

    /// Full snapshot: records ordered by number, types by id
    pub async fn load_catalog(&self) -> DomainResult<Catalog> {
        match self.load_from_db().await {
            Ok(Some(catalog)) => return Ok(catalog),
            Ok(None) => log::warn!("Catalog database not ready, reading export"),
            Err(e) => log::warn!("Catalog database read failed, reading export: {}", e),
        }
        self.load_from_export()
    }

    pub async fn list_pokemon(&self) -> DomainResult<Vec<Pokemon>> {
        Ok(self.load_catalog().await?.pokemon)
    }

    pub async fn list_types(&self) -> DomainResult<Vec<TypeInfo>> {
        Ok(self.load_catalog().await?.types)
    }

    /// Detail lookup; numbers outside the catalog range are rejected
    pub async fn get_pokemon(&self, number: u32) -> DomainResult<Option<Pokemon>> {
        let number = ensure_catalog_number(number)?;
        let catalog = self.load_catalog().await?;
        Ok(catalog.pokemon.into_iter().find(|p| p.number == number))
    }

    /// `None` when the connection is missing or the tables are empty
    async fn load_from_db(&self) -> DomainResult<Option<Catalog>> {
        if !self.db.is_ready().await {
            return Ok(None);
        }

        let catalog = read_catalog(&self.db).await?;
        if catalog.is_empty() {
            Ok(None)
        } else {
            Ok(Some(catalog))
        }
    }

    /// On-disk export when present, embedded copy otherwise
    pub fn load_from_export(&self) -> DomainResult<Catalog> {
        let export = if self.config.export_path.is_file() {
            log::info!("Reading catalog export from {}", self.config.export_path.display());
            PokedexExport::from_file(&self.config.export_path)?
        } else {
            PokedexExport::embedded()?
        };

        let (pokemon, types) = export.into_unchecked();
        let catalog = validate_catalog(pokemon, types)?;
        if catalog.is_empty() {
            return Err(DomainError::NotFound("catalog export has no records".to_string()));
        }
        Ok(catalog)
    }
}
