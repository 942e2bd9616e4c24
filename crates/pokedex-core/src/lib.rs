//! Pokédex Core
//!
//! Shared, browser- and database-free pieces of the Pokédex:
//! - models: catalog records and the snapshot
//! - query: filtering/sorting for the listing view
//! - url_state: query-string codec for shareable listing URLs
//! - validate: parse-and-validate boundary for data sources

pub mod models;
pub mod query;
pub mod url_state;
pub mod validate;

pub use models::{
    Catalog, Pokemon, PokemonType, StatKind, Stats, TypeInfo, CATALOG_SIZE, FALLBACK_COLOR,
    PLACEHOLDER_IMAGE, STAT_MAX,
};
pub use query::{filter_and_sort, has_all_types, matches_search, ListQuery, SortDirection, SortKey, SortSpec};
pub use validate::{
    check_catalog, validate_catalog, validate_pokemon, validate_type, UncheckedPokemon,
    UncheckedType, UncheckedTypeRef, ValidationError, ValidationResult,
};

#[cfg(test)]
mod tests;

#[cfg(test)]
mod serde_tests {
    use super::*;

    /// Catalog JSON handed to the frontend keeps its shape
    #[test]
    fn test_catalog_serde_shape() {
        let catalog = Catalog {
            pokemon: vec![Pokemon {
                id: 25,
                number: 25,
                name: "Pikachu".to_string(),
                stats: Stats {
                    hp: 35,
                    attack: 55,
                    defense: 40,
                    special_attack: 50,
                    special_defense: 50,
                    speed: 90,
                },
                types: vec![PokemonType::new("Electric", "F7D02C")],
            }],
            types: vec![TypeInfo {
                id: 13,
                name: "Electric".to_string(),
                color: "F7D02C".to_string(),
            }],
        };

        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["pokemon"][0]["number"], 25);
        assert_eq!(json["pokemon"][0]["stats"]["speed"], 90);
        assert_eq!(json["pokemon"][0]["types"][0]["color"], "F7D02C");

        let back: Catalog = serde_json::from_value(json).unwrap();
        assert_eq!(back, catalog);
    }
}
