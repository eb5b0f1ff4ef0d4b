//! Repository port - abstraction for loading and persisting entities
//!
//! This trait lets the domain layer fetch and store entities by identity
//! without knowing about storage technology. Every implementation must
//! honor the exact error taxonomy in [`crate::error::RepositoryError`] so
//! that a `UseCaseExecutor` written against this trait needs no change when
//! one implementation is swapped for another (Liskov substitutability).
use crate::domain::entities::Identifiable;
use crate::error::RepositoryResult;

/// Abstract repository mapping an identity to zero-or-one entity.
pub trait Repository<E: Identifiable> {
    /// Load the entity with the given identity.
    ///
    /// Fails with `NotFound` when no record matches `id`; fails with
    /// `Unavailable` when the backing store cannot be reached. These two
    /// failure modes are never conflated: an absent record is not an
    /// infrastructure failure, and vice versa.
    fn find(&self, id: &str) -> RepositoryResult<E>;

    /// Create a new record for an entity that does not yet exist.
    ///
    /// Fails with `Conflict` if `id` already exists, when the
    /// implementation supports uniqueness enforcement.
    fn save(&self, entity: &E) -> RepositoryResult<()>;

    /// Persist a full entity back over an existing record.
    ///
    /// Fails with `NotFound` if `id` does not exist — this method never
    /// silently creates a record.
    fn update(&self, entity: &E) -> RepositoryResult<()>;

    /// Remove the record with the given identity.
    fn delete(&self, id: &str) -> RepositoryResult<()>;
}
