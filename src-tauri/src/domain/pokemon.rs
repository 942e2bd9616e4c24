//! Catalog Entities
//!
//! Records and types come from pokedex-core; the backend only adds identity
//! and the detail-lookup range rule.

use pokedex_core::{Pokemon, TypeInfo, CATALOG_SIZE};

use super::entity::{DomainError, DomainResult, Entity};

/// Records are keyed by display number, the natural key used in routes
impl Entity for Pokemon {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.number
    }
}

impl Entity for TypeInfo {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Reject detail lookups outside 1..=151
pub fn ensure_catalog_number(number: u32) -> DomainResult<u32> {
    if (1..=CATALOG_SIZE).contains(&number) {
        Ok(number)
    } else {
        Err(DomainError::InvalidInput(format!(
            "number {} outside 1..={}",
            number, CATALOG_SIZE
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::Stats;

    #[test]
    fn test_pokemon_identity_is_number() {
        let p = Pokemon {
            id: 900,
            number: 25,
            name: "Pikachu".to_string(),
            stats: Stats::default(),
            types: vec![],
        };
        assert_eq!(Entity::id(&p), 25);
    }

    #[test]
    fn test_catalog_number_range() {
        assert_eq!(ensure_catalog_number(1).unwrap(), 1);
        assert_eq!(ensure_catalog_number(151).unwrap(), 151);
        assert!(matches!(ensure_catalog_number(0), Err(DomainError::InvalidInput(_))));
        assert!(matches!(ensure_catalog_number(152), Err(DomainError::InvalidInput(_))));
    }
}
