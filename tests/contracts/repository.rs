//! Substitutability contract: any two `Repository` implementations, given
//! the same sequence of `save`/`find`/`update`/`delete` calls, must produce
//! the same sequence of success/`NotFound`/`Conflict` outcomes.
//!
//! `RemoteRepository` is exercised separately (see its own unit tests) and
//! left out of this contract run because its outcomes depend on a live
//! server being reachable, which this crate does not stand up for tests —
//! `Unavailable` is explicitly environment-dependent and excluded from the
//! substitutability guarantee by the spec this crate implements.

use usecase_core::domain::entities::Idea;
use usecase_core::domain::ports::Repository;
use usecase_core::error::RepositoryError;
use usecase_core::infrastructure::repositories::{FileRepository, InMemoryRepository};

/// Outcome shape used to compare across implementations, ignoring any
/// message text carried by `Unavailable`/`Conflict`.
#[derive(Debug, PartialEq)]
enum Outcome {
    Ok,
    NotFound,
    Conflict,
}

fn outcome<T>(result: Result<T, RepositoryError>) -> Outcome {
    match result {
        Ok(_) => Outcome::Ok,
        Err(RepositoryError::NotFound) => Outcome::NotFound,
        Err(RepositoryError::Conflict(_)) => Outcome::Conflict,
        Err(RepositoryError::Unavailable(msg)) => {
            panic!("unexpected Unavailable in contract run: {msg}")
        }
    }
}

fn run_scenario(repo: &dyn Repository<Idea>) -> Vec<Outcome> {
    let mut outcomes = Vec::new();

    outcomes.push(outcome(repo.find("idea-1")));
    outcomes.push(outcome(repo.save(&Idea::new("idea-1"))));
    outcomes.push(outcome(repo.find("idea-1")));
    outcomes.push(outcome(repo.save(&Idea::new("idea-1")))); // duplicate save
    outcomes.push(outcome(repo.update(&Idea::with_history("idea-1", 1, 5.0))));
    outcomes.push(outcome(repo.delete("idea-1")));
    outcomes.push(outcome(repo.update(&Idea::new("idea-1")))); // update after delete
    outcomes.push(outcome(repo.delete("idea-1"))); // delete after delete

    outcomes
}

#[test]
fn in_memory_and_file_repositories_produce_the_same_outcome_sequence() {
    let memory: InMemoryRepository<Idea> = InMemoryRepository::new();
    let dir = tempfile::tempdir().unwrap();
    let file: FileRepository<Idea> = FileRepository::new(dir.path()).unwrap();

    let memory_outcomes = run_scenario(&memory);
    let file_outcomes = run_scenario(&file);

    assert_eq!(memory_outcomes, file_outcomes);
    assert_eq!(
        memory_outcomes,
        vec![
            Outcome::NotFound,
            Outcome::Ok,
            Outcome::Ok,
            Outcome::Conflict,
            Outcome::Ok,
            Outcome::Ok,
            Outcome::NotFound,
            Outcome::NotFound,
        ]
    );
}

#[test]
fn round_trip_preserves_entity_observationally() {
    let memory: InMemoryRepository<Idea> = InMemoryRepository::new();
    let idea = Idea::with_history("idea-1", 10, 4.0);

    memory.save(&idea).unwrap();
    let found = memory.find("idea-1").unwrap();

    assert_eq!(found, idea);
}
