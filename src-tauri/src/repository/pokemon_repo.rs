//! Pokemon Repository
//!
//! SQLite-backed Record Store lookups. Each record carries its types
//! resolved through `pokemon_types`, in join-row order.

use async_trait::async_trait;
use rusqlite::{params, Connection};
use std::collections::HashMap;

use pokedex_core::{validate_pokemon, Pokemon, UncheckedPokemon, UncheckedTypeRef};

use super::db::SharedConnection;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult};

const SELECT_POKEMON: &str = "SELECT id, number, name, hp, attack, defense, special_attack, special_defense, speed FROM pokemon";

/// SQLite implementation of the Record Store
pub struct PokemonRepository {
    conn: SharedConnection,
}

impl PokemonRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

fn row_to_unchecked(row: &rusqlite::Row) -> rusqlite::Result<UncheckedPokemon> {
    Ok(UncheckedPokemon {
        id: row.get(0)?,
        number: row.get(1)?,
        name: row.get(2)?,
        hp: row.get(3)?,
        attack: row.get(4)?,
        defense: row.get(5)?,
        special_attack: row.get(6)?,
        special_defense: row.get(7)?,
        speed: row.get(8)?,
        types: Vec::new(),
    })
}

/// Type references per record number, ordered by join row id
fn load_type_refs(conn: &Connection, number: Option<i64>) -> DomainResult<HashMap<i64, Vec<UncheckedTypeRef>>> {
    let base = "SELECT pt.pokemon_number, t.name, t.color
                FROM pokemon_types pt
                INNER JOIN types t ON t.id = pt.type_id";

    let mut refs: HashMap<i64, Vec<UncheckedTypeRef>> = HashMap::new();
    let mut push = |row: &rusqlite::Row| -> rusqlite::Result<()> {
        refs.entry(row.get(0)?).or_default().push(UncheckedTypeRef {
            name: row.get(1)?,
            color: row.get(2)?,
        });
        Ok(())
    };

    match number {
        Some(n) => {
            let mut stmt = conn.prepare(&format!("{} WHERE pt.pokemon_number = ? ORDER BY pt.id", base))?;
            let mut rows = stmt.query(params![n])?;
            while let Some(row) = rows.next()? {
                push(row)?;
            }
        }
        None => {
            let mut stmt = conn.prepare(&format!("{} ORDER BY pt.id", base))?;
            let mut rows = stmt.query([])?;
            while let Some(row) = rows.next()? {
                push(row)?;
            }
        }
    }
    Ok(refs)
}

/// Every record, ordered by number, unvalidated
fn load_unchecked_pokemon(conn: &Connection) -> DomainResult<Vec<UncheckedPokemon>> {
    let mut refs = load_type_refs(conn, None)?;

    let mut stmt = conn.prepare(&format!("{} ORDER BY number", SELECT_POKEMON))?;
    let rows = stmt.query_map([], row_to_unchecked)?;

    let mut records = Vec::new();
    for row in rows {
        let mut raw = row?;
        raw.types = refs.remove(&raw.number).unwrap_or_default();
        records.push(raw);
    }
    Ok(records)
}

#[async_trait]
impl Repository<Pokemon> for PokemonRepository {
    async fn find_by_id(&self, number: u32) -> DomainResult<Option<Pokemon>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let mut stmt = conn.prepare(&format!("{} WHERE number = ?", SELECT_POKEMON))?;
        let mut rows = stmt.query_map(params![number], row_to_unchecked)?;

        match rows.next() {
            Some(row) => {
                let mut raw = row?;
                raw.types = load_type_refs(conn, Some(raw.number))?
                    .remove(&raw.number)
                    .unwrap_or_default();
                Ok(Some(validate_pokemon(raw)?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> DomainResult<Vec<Pokemon>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let records = load_unchecked_pokemon(conn)?
            .into_iter()
            .map(validate_pokemon)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}
