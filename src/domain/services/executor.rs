//! Use Case Executor
//!
//! Orchestrates the load -> apply -> persist sequence for one business
//! operation. Parameterized by its dependencies (the `Repository` and
//! `TransformStrategy` ports), so it owns no knowledge of which concrete
//! Repository or Strategy is wired in — swapping either requires no change
//! to this file.
//!
//! # Size Justification
//!
//! This struct is intentionally kept as a single small unit: the three
//! steps of `execute` share private state (the loaded entity) that would
//! otherwise have to be threaded through module boundaries for no benefit.

use crate::domain::entities::Identifiable;
use crate::domain::ports::{Repository, TransformStrategy};
use crate::error::{ExecutorError, ExecutorResult, RepositoryError};

/// Orchestrates one `execute` call: load via `R`, apply `S`, persist via
/// `R`, return the mutated entity or a terminal [`ExecutorError`].
///
/// Stateless and safely shared across concurrent callers when `R` and `S`
/// are `Send + Sync`.
pub struct UseCaseExecutor<R, S> {
    repository: R,
    strategy: S,
}

impl<R, S> UseCaseExecutor<R, S> {
    /// Construct an executor from its two injected dependencies.
    pub fn new(repository: R, strategy: S) -> Self {
        Self { repository, strategy }
    }
}

impl<R, S> UseCaseExecutor<R, S> {
    /// Run the load -> apply -> persist sequence for `identity` with
    /// `params`.
    ///
    /// No step may be skipped or reordered: persisting (step 3) is only
    /// reached if applying (step 2) succeeded, so at most one mutation is
    /// visible per call.
    pub fn execute<E, P>(&self, identity: &str, params: P) -> ExecutorResult<E>
    where
        E: Identifiable,
        R: Repository<E>,
        S: TransformStrategy<E, P>,
    {
        tracing::debug!(identity, "use case executor: loading");

        // Step 1: Loading.
        let mut entity = match self.repository.find(identity) {
            Ok(entity) => entity,
            Err(RepositoryError::NotFound) => {
                tracing::debug!(identity, "use case executor: not found");
                return Err(ExecutorError::DomainNotFound);
            }
            Err(err @ RepositoryError::Unavailable(_)) => {
                tracing::warn!(identity, error = %err, "use case executor: repository unavailable");
                return Err(ExecutorError::InfrastructureUnavailable(err));
            }
            Err(err @ RepositoryError::Conflict(_)) => {
                // find() does not declare Conflict, but an implementation
                // that raced a delete-then-recreate could surface it here;
                // treat it the same as an infrastructure hiccup rather than
                // inventing a new executor outcome for it.
                tracing::warn!(identity, error = %err, "use case executor: repository conflict on load");
                return Err(ExecutorError::InfrastructureUnavailable(err));
            }
        };

        // Step 2: Applying.
        if let Err(reject) = self.strategy.apply(&mut entity, params) {
            tracing::debug!(identity, reason = %reject, "use case executor: rejected");
            return Err(ExecutorError::DomainRejected(reject));
        }

        // Step 3: Persisting.
        match self.repository.update(&entity) {
            Ok(()) => {
                tracing::debug!(identity, "use case executor: completed");
                Ok(entity)
            }
            Err(RepositoryError::NotFound) => {
                tracing::warn!(identity, "use case executor: entity disappeared before update");
                Err(ExecutorError::DomainConflict)
            }
            Err(err) => {
                tracing::warn!(identity, error = %err, "use case executor: update failed");
                Err(ExecutorError::InfrastructureUnavailable(err))
            }
        }
    }
}
