//! Type Repository
//!
//! SQLite-backed Tag Catalog lookups.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use pokedex_core::{validate_type, TypeInfo, UncheckedType};

use super::db::SharedConnection;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult};

/// SQLite implementation of the Tag Catalog
pub struct TypeRepository {
    conn: SharedConnection,
}

impl TypeRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

/// Every type, ordered by id, unvalidated
fn load_unchecked_types(conn: &Connection) -> DomainResult<Vec<UncheckedType>> {
    let mut stmt = conn.prepare("SELECT id, name, color FROM types ORDER BY id")?;
    let rows = stmt.query_map([], row_to_unchecked)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

fn row_to_unchecked(row: &rusqlite::Row) -> rusqlite::Result<UncheckedType> {
    Ok(UncheckedType {
        id: row.get(0)?,
        name: row.get(1)?,
        color: row.get(2)?,
    })
}

#[async_trait]
impl Repository<TypeInfo> for TypeRepository {
    async fn find_by_id(&self, id: u32) -> DomainResult<Option<TypeInfo>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let raw = conn
            .query_row(
                "SELECT id, name, color FROM types WHERE id = ?",
                params![id],
                row_to_unchecked,
            )
            .optional()?;

        Ok(raw.map(validate_type).transpose()?)
    }

    async fn list(&self) -> DomainResult<Vec<TypeInfo>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or(DomainError::Internal("Database not initialized".to_string()))?;

        let types = load_unchecked_types(conn)?
            .into_iter()
            .map(validate_type)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(types)
    }
}
