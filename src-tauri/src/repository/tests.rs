//! Repository Integration Tests
//!
//! Tests for the catalog repositories with in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::DomainError;
    use crate::repository::db::seed_from_export;
    use crate::repository::{
        open_db, read_catalog, DbState, PokedexExport, PokemonRepository, Repository,
        TypeRepository,
    };
    use pokedex_core::{Pokemon, TypeInfo, CATALOG_SIZE};
    use rusqlite::Connection;
    use std::path::Path;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    fn seeded_connection() -> Connection {
        let export = PokedexExport::embedded().expect("embedded export parses");
        open_db(Path::new(":memory:"), &export).expect("Failed to init test DB")
    }

    fn setup_test_db() -> DbState {
        DbState {
            conn: Arc::new(Mutex::new(Some(seeded_connection()))),
        }
    }

    #[tokio::test]
    async fn test_seeded_database_reads_full_catalog() {
        let catalog = read_catalog(&setup_test_db()).await.expect("catalog validates");

        assert_eq!(catalog.pokemon.len(), CATALOG_SIZE as usize);
        assert_eq!(catalog.types.len(), 18);
        let numbers: Vec<u32> = catalog.pokemon.iter().map(|p| p.number).collect();
        let mut sorted = numbers.clone();
        sorted.sort();
        assert_eq!(numbers, sorted);
    }

    #[tokio::test]
    async fn test_database_matches_embedded_export() {
        let from_db = read_catalog(&setup_test_db()).await.unwrap();

        let (pokemon, types) = PokedexExport::embedded().unwrap().into_unchecked();
        let from_json = pokedex_core::validate_catalog(pokemon, types).unwrap();

        assert_eq!(from_db, from_json);
    }

    #[tokio::test]
    async fn test_find_pokemon_by_number() {
        let repo = PokemonRepository::new(setup_test_db().conn);

        let charizard: Pokemon = repo.find_by_id(6).await.expect("Find failed").unwrap();
        assert_eq!(charizard.name, "Charizard");
        let names: Vec<&str> = charizard.types.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Fire", "Flying"]);

        assert!(repo.find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_pokemon() {
        let repo = PokemonRepository::new(setup_test_db().conn);
        let all = repo.list().await.expect("List failed");
        assert_eq!(all.len(), CATALOG_SIZE as usize);
        assert_eq!(all[0].name, "Bulbasaur");
        assert_eq!(all[150].name, "Mew");
    }

    #[tokio::test]
    async fn test_list_types() {
        let repo = TypeRepository::new(setup_test_db().conn);
        let types: Vec<TypeInfo> = repo.list().await.unwrap();
        assert_eq!(types.len(), 18);
        assert!(types.windows(2).all(|w| w[0].id < w[1].id));

        let first = repo.find_by_id(types[0].id).await.unwrap().unwrap();
        assert_eq!(first, types[0]);
        assert!(repo.find_by_id(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_uninitialized_connection() {
        let repo = PokemonRepository::new(DbState::new().conn);
        let result = repo.list().await;
        assert!(matches!(result, Err(DomainError::Internal(_))));
    }

    #[test]
    fn test_reopen_does_not_reseed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pokedex.db");
        let export = PokedexExport::embedded().unwrap();

        drop(open_db(&path, &export).unwrap());
        let conn = open_db(&path, &export).unwrap();

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM pokemon", [], |r| r.get(0)).unwrap();
        assert_eq!(count, CATALOG_SIZE as i64);
    }

    #[test]
    fn test_seeding_twice_fails_atomically() {
        let mut conn = seeded_connection();
        let export = PokedexExport::embedded().unwrap();

        assert!(seed_from_export(&mut conn, &export).is_err());
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM pokemon_types", [], |r| r.get(0)).unwrap();
        assert_eq!(count, export.pokemon_type.len() as i64);
    }

    #[tokio::test]
    async fn test_invalid_row_fails_catalog_validation() {
        let conn = seeded_connection();
        conn.execute("UPDATE pokemon SET hp = -1 WHERE number = 25", []).unwrap();
        let db = DbState {
            conn: Arc::new(Mutex::new(Some(conn))),
        };
        let err = read_catalog(&db).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
