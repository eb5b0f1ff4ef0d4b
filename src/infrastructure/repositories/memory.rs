//! In-memory Repository
//!
//! Stands in for a relational-store-backed repository: entities live in a
//! `HashMap` behind a `Mutex`, shared via `Arc` so a handle can be kept by
//! the caller for inspection after another handle has been moved into a
//! `UseCaseExecutor`. `find`/`save`/`update`/`delete` block the calling
//! thread briefly and are safe to call concurrently from multiple threads.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::Identifiable;
use crate::domain::ports::Repository;
use crate::error::{RepositoryError, RepositoryResult};

/// A `Repository` backed by an in-process `HashMap`.
pub struct InMemoryRepository<E> {
    rows: Arc<Mutex<HashMap<String, E>>>,
}

impl<E> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<E> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Identifiable + Clone> Repository<E> for InMemoryRepository<E> {
    fn find(&self, id: &str) -> RepositoryResult<E> {
        let rows = self
            .rows
            .lock()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".into()))?;
        rows.get(id).cloned().ok_or(RepositoryError::NotFound)
    }

    fn save(&self, entity: &E) -> RepositoryResult<()> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".into()))?;
        if rows.contains_key(entity.id()) {
            return Err(RepositoryError::Conflict(format!(
                "entity '{}' already exists",
                entity.id()
            )));
        }
        rows.insert(entity.id().to_string(), entity.clone());
        Ok(())
    }

    fn update(&self, entity: &E) -> RepositoryResult<()> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".into()))?;
        if !rows.contains_key(entity.id()) {
            return Err(RepositoryError::NotFound);
        }
        rows.insert(entity.id().to_string(), entity.clone());
        Ok(())
    }

    fn delete(&self, id: &str) -> RepositoryResult<()> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".into()))?;
        rows.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}
