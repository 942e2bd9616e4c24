//! Database Connection and Setup
//!
//! Manages the SQLite connection, migrations and first-run seeding.

use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::export::PokedexExport;
use crate::domain::{DomainError, DomainResult};

/// Shared connection slot; `None` until background initialization finishes
pub type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    pub conn: SharedConnection,
}

impl DbState {
    pub fn new() -> Self {
        Self {
            conn: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn is_ready(&self) -> bool {
        self.conn.lock().await.is_some()
    }
}

impl Default for DbState {
    fn default() -> Self {
        Self::new()
    }
}

/// Open (or create) the database, migrate, and seed from `seed` when empty
pub fn open_db(db_path: &Path, seed: &PokedexExport) -> DomainResult<Connection> {
    let mut conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    run_migrations(&conn)?;

    if count_pokemon(&conn)? == 0 {
        let inserted = seed_from_export(&mut conn, seed)?;
        log::info!("Seeded catalog database with {} records", inserted);
    }

    Ok(conn)
}

/// Initialize database with path, seeding from the embedded export
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let path = db_path.to_path_buf();
    let conn = tokio::task::spawn_blocking(move || {
        let seed = PokedexExport::embedded()?;
        open_db(&path, &seed)
    })
    .await
    .map_err(|e| DomainError::Internal(format!("DB init task failed: {}", e)))??;

    let state = DbState::new();
    *state.conn.lock().await = Some(conn);
    Ok(state)
}

fn count_pokemon(conn: &Connection) -> DomainResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM pokemon", [], |row| row.get(0))?)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS types (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            color TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS pokemon (
            id INTEGER PRIMARY KEY,
            number INTEGER NOT NULL UNIQUE,
            name TEXT NOT NULL,
            hp INTEGER NOT NULL,
            attack INTEGER NOT NULL,
            defense INTEGER NOT NULL,
            special_attack INTEGER NOT NULL,
            special_defense INTEGER NOT NULL,
            speed INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS pokemon_types (
            id INTEGER PRIMARY KEY,
            pokemon_number INTEGER NOT NULL REFERENCES pokemon(number),
            type_id INTEGER NOT NULL REFERENCES types(id)
        );

        CREATE INDEX IF NOT EXISTS idx_pokemon_types_number ON pokemon_types(pokemon_number);",
    )?;
    Ok(())
}

/// Copy the export into empty tables in one transaction
pub fn seed_from_export(conn: &mut Connection, export: &PokedexExport) -> DomainResult<usize> {
    let tx = conn.transaction()?;
    {
        let mut insert_type = tx.prepare("INSERT INTO types (id, name, color) VALUES (?1, ?2, ?3)")?;
        for t in &export.types {
            insert_type.execute(params![t.id, t.nom, t.color])?;
        }

        let mut insert_pokemon = tx.prepare(
            "INSERT INTO pokemon (id, number, name, hp, attack, defense, special_attack, special_defense, speed)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        )?;
        for p in &export.pokemon {
            insert_pokemon.execute(params![
                p.id,
                p.numero,
                p.nom,
                p.pv,
                p.attaque,
                p.defense,
                p.attaque_spe,
                p.defense_spe,
                p.vitesse
            ])?;
        }

        let mut insert_link =
            tx.prepare("INSERT INTO pokemon_types (id, pokemon_number, type_id) VALUES (?1, ?2, ?3)")?;
        for link in &export.pokemon_type {
            insert_link.execute(params![link.id, link.pokemon_numero, link.type_id])?;
        }
    }
    tx.commit()?;
    Ok(export.pokemon.len())
}
