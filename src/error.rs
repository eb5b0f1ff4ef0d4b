//! Error taxonomy for the use-case execution core.
//!
//! Three layers, one enum each, matching the three boundaries a call crosses:
//! Repository, Strategy, and the Use Case Executor that sits above both.
//! The executor never discards the error it received from a lower layer —
//! every `ExecutorError` variant that can be caused by a lower failure keeps
//! it via `#[source]`.

use thiserror::Error;

/// Result type alias for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors a `Repository` implementation may report.
///
/// Every concrete implementation (in-memory, file, remote) must restrict
/// itself to this exact set: no implementation may narrow success cases or
/// invent a failure mode this enum does not declare.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The addressed entity does not exist. Not retried.
    #[error("entity not found")]
    NotFound,

    /// The backing store could not be reached (network/IO failure). Safe to
    /// retry by the caller.
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    /// A uniqueness or concurrent-modification violation at the storage
    /// layer. Surfaced, never auto-retried.
    #[error("repository conflict: {0}")]
    Conflict(String),
}

/// Result type alias for strategy operations.
pub type StrategyResult<T> = Result<T, StrategyError>;

/// Errors a `Strategy` implementation may report.
#[derive(Error, Debug)]
pub enum StrategyError {
    /// The strategy refused the operation for a domain reason. Terminal,
    /// never retried. Carries a reason code rather than a bare boolean so
    /// the caller knows *why*.
    #[error("rejected: {0}")]
    Rejected(String),
}

/// Result type alias for `UseCaseExecutor::execute`.
pub type ExecutorResult<T> = Result<T, ExecutorError>;

/// Terminal outcomes of `UseCaseExecutor::execute`.
///
/// Each variant maps to exactly one step of the load → apply → persist state
/// machine (see `domain::services::executor`); none may be skipped or
/// reordered by a caller.
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Step 1 (Loading) found no entity for the given identity.
    #[error("resource does not exist")]
    DomainNotFound,

    /// Step 1 or step 3 could not reach the backing store.
    #[error("infrastructure unavailable, retry later: {0}")]
    InfrastructureUnavailable(#[source] RepositoryError),

    /// Step 2 (Applying) was refused by the injected Strategy.
    #[error("rejected: {0}")]
    DomainRejected(#[source] StrategyError),

    /// Step 3 (Persisting) found the entity had disappeared between load
    /// and update — a concurrent delete raced this call.
    #[error("entity was concurrently modified")]
    DomainConflict,
}
