//! Scenario: execute("missing-id", {rating:5}) against an empty Repository
//! -> expect terminal state DomainNotFound, zero Repository write calls.

use usecase_core::domain::entities::Idea;
use usecase_core::domain::ports::Repository;
use usecase_core::domain::services::UseCaseExecutor;
use usecase_core::error::{ExecutorError, RepositoryError};
use usecase_core::infrastructure::repositories::InMemoryRepository;
use usecase_core::infrastructure::strategies::RatingStrategy;

#[test]
fn executing_against_a_missing_identity_terminates_as_domain_not_found() {
    let repository: InMemoryRepository<Idea> = InMemoryRepository::new();
    let inspection_handle = repository.clone();
    let executor = UseCaseExecutor::new(repository, RatingStrategy::one_to_five());

    let result = executor.execute("missing-id", 5.0);

    assert!(matches!(result, Err(ExecutorError::DomainNotFound)));
    // No write ever landed: the repository is still empty for this id.
    assert!(matches!(
        inspection_handle.find("missing-id"),
        Err(RepositoryError::NotFound)
    ));
}
