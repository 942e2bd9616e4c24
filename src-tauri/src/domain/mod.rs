//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! Catalog data types live in pokedex-core and are shared with the frontend.

mod entity;
mod pokemon;

pub use entity::{DomainError, DomainResult, Entity};
pub use pokemon::ensure_catalog_number;
