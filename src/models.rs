//! Frontend Models
//!
//! Data structures shared with the backend through pokedex-core.

pub use pokedex_core::{
    Catalog, ListQuery, Pokemon, PokemonType, SortSpec, StatKind, TypeInfo, PLACEHOLDER_IMAGE,
    STAT_MAX,
};
