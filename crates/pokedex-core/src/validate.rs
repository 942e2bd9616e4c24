//! Catalog Validation
//!
//! Parse-and-validate boundary between a data source (database rows, JSON export)
//! and the rest of the application. Runs once per load; everything downstream
//! works on the validated [`Catalog`].

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{Catalog, Pokemon, PokemonType, Stats, TypeInfo, CATALOG_SIZE};

/// Record as read from a source, before any check. Signed fields so that
/// negative values survive long enough to be rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct UncheckedPokemon {
    pub id: i64,
    pub number: i64,
    pub name: String,
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub special_attack: i64,
    pub special_defense: i64,
    pub speed: i64,
    pub types: Vec<UncheckedTypeRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UncheckedTypeRef {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UncheckedType {
    pub id: i64,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("record #{number}: id must be positive, got {id}")]
    InvalidId { number: i64, id: i64 },

    #[error("record id {id}: number {number} outside 1..={max}", max = CATALOG_SIZE)]
    NumberOutOfRange { id: i64, number: i64 },

    #[error("record #{number}: name is empty")]
    EmptyName { number: i64 },

    #[error("record #{number}: {stat} must be a non-negative integer, got {value}")]
    InvalidStat {
        number: i64,
        stat: &'static str,
        value: i64,
    },

    #[error("duplicate record number {0}")]
    DuplicateNumber(u32),

    #[error("type id must be positive, got {0}")]
    InvalidTypeId(i64),

    #[error("type {id}: name is empty")]
    EmptyTypeName { id: i64 },

    #[error("duplicate type name '{0}'")]
    DuplicateTypeName(String),

    #[error("type '{name}': invalid color '{color}' (expected 6 hex digits)")]
    InvalidColor { name: String, color: String },

    #[error("record #{number}: unknown type '{name}'")]
    UnknownType { number: u32, name: String },

    #[error("record #{number}: type '{name}' has color '{color}', catalog says '{expected}'")]
    TypeColorMismatch {
        number: u32,
        name: String,
        color: String,
        expected: String,
    },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

fn color_regex() -> &'static Regex {
    static COLOR: OnceLock<Regex> = OnceLock::new();
    COLOR.get_or_init(|| Regex::new(r"^[0-9a-fA-F]{6}$").expect("static color pattern"))
}

fn check_color(name: &str, color: &str) -> ValidationResult<()> {
    if color_regex().is_match(color) {
        Ok(())
    } else {
        Err(ValidationError::InvalidColor {
            name: name.to_string(),
            color: color.to_string(),
        })
    }
}

fn check_stat(number: i64, stat: &'static str, value: i64) -> ValidationResult<u32> {
    u32::try_from(value).map_err(|_| ValidationError::InvalidStat { number, stat, value })
}

/// Validate a single Tag Catalog entry
pub fn validate_type(raw: UncheckedType) -> ValidationResult<TypeInfo> {
    let id = u32::try_from(raw.id)
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ValidationError::InvalidTypeId(raw.id))?;
    if raw.name.trim().is_empty() {
        return Err(ValidationError::EmptyTypeName { id: raw.id });
    }
    check_color(&raw.name, &raw.color)?;
    Ok(TypeInfo {
        id,
        name: raw.name,
        color: raw.color,
    })
}

/// Validate a single record in isolation (no cross-record checks)
pub fn validate_pokemon(raw: UncheckedPokemon) -> ValidationResult<Pokemon> {
    let number = raw.number;
    let id = u32::try_from(raw.id)
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ValidationError::InvalidId { number, id: raw.id })?;
    let checked_number = u32::try_from(number)
        .ok()
        .filter(|n| (1..=CATALOG_SIZE).contains(n))
        .ok_or(ValidationError::NumberOutOfRange { id: raw.id, number })?;
    if raw.name.trim().is_empty() {
        return Err(ValidationError::EmptyName { number });
    }

    let stats = Stats {
        hp: check_stat(number, "hp", raw.hp)?,
        attack: check_stat(number, "attack", raw.attack)?,
        defense: check_stat(number, "defense", raw.defense)?,
        special_attack: check_stat(number, "special_attack", raw.special_attack)?,
        special_defense: check_stat(number, "special_defense", raw.special_defense)?,
        speed: check_stat(number, "speed", raw.speed)?,
    };

    let mut types = Vec::with_capacity(raw.types.len());
    for t in raw.types {
        check_color(&t.name, &t.color)?;
        types.push(PokemonType::new(t.name, t.color));
    }

    Ok(Pokemon {
        id,
        number: checked_number,
        name: raw.name,
        stats,
        types,
    })
}

/// Validate a whole snapshot: per-entry checks, then [`check_catalog`].
/// The returned records are ordered by number, types by id.
pub fn validate_catalog(
    pokemon: Vec<UncheckedPokemon>,
    types: Vec<UncheckedType>,
) -> ValidationResult<Catalog> {
    let types = types
        .into_iter()
        .map(validate_type)
        .collect::<ValidationResult<Vec<_>>>()?;
    let pokemon = pokemon
        .into_iter()
        .map(validate_pokemon)
        .collect::<ValidationResult<Vec<_>>>()?;
    check_catalog(pokemon, types)
}

/// Cross-record checks over individually valid entries: unique numbers and
/// type names, and every record type present in the Tag Catalog with its color.
pub fn check_catalog(
    mut pokemon: Vec<Pokemon>,
    mut types: Vec<TypeInfo>,
) -> ValidationResult<Catalog> {
    types.sort_by_key(|t| t.id);

    let mut known: HashMap<&str, &str> = HashMap::with_capacity(types.len());
    for t in &types {
        if known.insert(t.name.as_str(), t.color.as_str()).is_some() {
            return Err(ValidationError::DuplicateTypeName(t.name.clone()));
        }
    }

    let mut seen = HashSet::with_capacity(pokemon.len());
    for p in &pokemon {
        if !seen.insert(p.number) {
            return Err(ValidationError::DuplicateNumber(p.number));
        }
        for t in &p.types {
            let Some(expected) = known.get(t.name.as_str()) else {
                return Err(ValidationError::UnknownType {
                    number: p.number,
                    name: t.name.clone(),
                });
            };
            if !t.color.eq_ignore_ascii_case(expected) {
                return Err(ValidationError::TypeColorMismatch {
                    number: p.number,
                    name: t.name.clone(),
                    color: t.color.clone(),
                    expected: expected.to_string(),
                });
            }
        }
    }
    pokemon.sort_by_key(|p| p.number);

    Ok(Catalog { pokemon, types })
}
