//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! The catalog is read-only, so only lookups are exposed.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Read-only repository trait
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities in their natural order
    async fn list(&self) -> DomainResult<Vec<T>>;
}
