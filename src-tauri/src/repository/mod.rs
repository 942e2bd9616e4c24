//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod export;
mod pokemon_repo;
mod type_repo;

#[cfg(test)]
mod tests;

use pokedex_core::{check_catalog, Catalog};

use crate::domain::DomainResult;

pub use traits::Repository;
pub use db::{init_db, open_db, DbState};
pub use export::PokedexExport;
pub use pokemon_repo::PokemonRepository;
pub use type_repo::TypeRepository;

/// Read both stores and check them as one snapshot
pub async fn read_catalog(db: &DbState) -> DomainResult<Catalog> {
    let types = TypeRepository::new(db.conn.clone()).list().await?;
    let pokemon = PokemonRepository::new(db.conn.clone()).list().await?;
    Ok(check_catalog(pokemon, types)?)
}
