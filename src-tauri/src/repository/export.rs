//! Pokédex Export
//!
//! JSON export of the three catalog tables. Used to seed a fresh database
//! and as the fallback source when the database is unavailable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use pokedex_core::{UncheckedPokemon, UncheckedType, UncheckedTypeRef};

use crate::domain::DomainResult;

/// Export shipped inside the binary
const EMBEDDED_EXPORT: &str = include_str!("../../data/pokedex_export.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPokemon {
    pub id: i64,
    pub nom: String,
    pub numero: i64,
    pub pv: i64,
    pub attaque: i64,
    pub defense: i64,
    pub attaque_spe: i64,
    pub defense_spe: i64,
    pub vitesse: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportType {
    pub id: i64,
    pub nom: String,
    pub color: String,
}

/// Join row; a record's types are ordered by this row's id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPokemonType {
    pub id: i64,
    pub pokemon_numero: i64,
    pub type_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokedexExport {
    pub pokemon: Vec<ExportPokemon>,
    #[serde(rename = "type")]
    pub types: Vec<ExportType>,
    pub pokemon_type: Vec<ExportPokemonType>,
}

impl PokedexExport {
    pub fn parse(json: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn embedded() -> DomainResult<Self> {
        Self::parse(EMBEDDED_EXPORT)
    }

    pub fn from_file(path: &Path) -> DomainResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Resolve the join table into per-record type lists.
    /// Join rows pointing at unknown type ids are dropped with a warning.
    pub fn into_unchecked(self) -> (Vec<UncheckedPokemon>, Vec<UncheckedType>) {
        let by_id: HashMap<i64, &ExportType> = self.types.iter().map(|t| (t.id, t)).collect();

        let mut links = self.pokemon_type.clone();
        links.sort_by_key(|link| link.id);

        let mut refs: HashMap<i64, Vec<UncheckedTypeRef>> = HashMap::new();
        for link in &links {
            match by_id.get(&link.type_id) {
                Some(t) => refs.entry(link.pokemon_numero).or_default().push(UncheckedTypeRef {
                    name: t.nom.clone(),
                    color: t.color.clone(),
                }),
                None => log::warn!(
                    "Export: pokemon_type {} references unknown type {}",
                    link.id,
                    link.type_id
                ),
            }
        }

        let pokemon = self
            .pokemon
            .into_iter()
            .map(|p| UncheckedPokemon {
                types: refs.remove(&p.numero).unwrap_or_default(),
                id: p.id,
                number: p.numero,
                name: p.nom,
                hp: p.pv,
                attack: p.attaque,
                defense: p.defense,
                special_attack: p.attaque_spe,
                special_defense: p.defense_spe,
                speed: p.vitesse,
            })
            .collect();

        let types = self
            .types
            .into_iter()
            .map(|t| UncheckedType {
                id: t.id,
                name: t.nom,
                color: t.color,
            })
            .collect();

        (pokemon, types)
    }
}
