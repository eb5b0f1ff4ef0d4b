//! Scenario: Entity {id: "idea-1", votes: 10, rating: 4.0}, apply rating 5
//! -> expect {votes: 11, rating: (4.0*10+5)/11 ≈ 4.09}.

use usecase_core::domain::entities::Idea;
use usecase_core::domain::ports::Repository;
use usecase_core::domain::services::UseCaseExecutor;
use usecase_core::infrastructure::repositories::InMemoryRepository;
use usecase_core::infrastructure::strategies::RatingStrategy;

#[test]
fn applying_an_in_range_rating_updates_votes_and_rating_together() {
    let repository: InMemoryRepository<Idea> = InMemoryRepository::new();
    repository
        .save(&Idea::with_history("idea-1", 10, 4.0))
        .unwrap();

    let executor = UseCaseExecutor::new(repository, RatingStrategy::one_to_five());
    let idea = executor.execute("idea-1", 5.0).expect("rating should be accepted");

    assert_eq!(idea.votes(), 11);
    assert!((idea.rating() - 4.090_909_090_909_091).abs() < 1e-9);
}
