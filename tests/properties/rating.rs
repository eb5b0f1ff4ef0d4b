//! Property tests for `Idea::add_rating` and `UseCaseExecutor` over it.

use proptest::prelude::*;

use usecase_core::domain::entities::Idea;
use usecase_core::domain::ports::Repository;
use usecase_core::domain::services::UseCaseExecutor;
use usecase_core::infrastructure::repositories::InMemoryRepository;
use usecase_core::infrastructure::strategies::RatingStrategy;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: applying a rating always increments `votes` by exactly 1,
    /// for any prior (rating, votes) and any folded-in value.
    #[test]
    fn property_add_rating_increments_votes_by_one(
        prior_votes in 0u32..10_000,
        prior_rating in 0.0f64..5.0,
        value in -100.0f64..100.0,
    ) {
        let mut idea = Idea::with_history("idea-1", prior_votes, prior_rating);
        idea.add_rating(value);
        prop_assert_eq!(idea.votes(), prior_votes + 1);
    }

    /// PROPERTY: the new rating is a pure function of `(rating, votes, v)` —
    /// replaying the same call on a fresh copy yields the same result.
    #[test]
    fn property_add_rating_is_deterministic(
        prior_votes in 0u32..10_000,
        prior_rating in 0.0f64..5.0,
        value in -100.0f64..100.0,
    ) {
        let mut a = Idea::with_history("idea-1", prior_votes, prior_rating);
        let mut b = Idea::with_history("idea-1", prior_votes, prior_rating);
        a.add_rating(value);
        b.add_rating(value);
        prop_assert_eq!(a.rating(), b.rating());
    }

    /// PROPERTY: two sequential applications of the same value are not
    /// conflated with a single application — votes strictly increases each
    /// time.
    #[test]
    fn property_repeated_identical_calls_each_count_once(
        value in 1.0f64..5.0,
        repeats in 1u32..20,
    ) {
        let mut idea = Idea::new("idea-1");
        for _ in 0..repeats {
            idea.add_rating(value);
        }
        prop_assert_eq!(idea.votes(), repeats);
    }

    /// PROPERTY: for any identity absent from the repository, `execute`
    /// terminates in `DomainNotFound` and never invokes the strategy
    /// (verified indirectly: votes of a never-created entity cannot have
    /// advanced, since there is nothing to observe).
    #[test]
    fn property_missing_identity_is_always_domain_not_found(
        id in "[a-z]{1,16}",
        value in -10.0f64..10.0,
    ) {
        let repository: InMemoryRepository<Idea> = InMemoryRepository::new();
        let executor = UseCaseExecutor::new(repository, RatingStrategy::one_to_five());

        let result = executor.execute(&id, value);

        prop_assert!(matches!(
            result,
            Err(usecase_core::error::ExecutorError::DomainNotFound)
        ));
    }

    /// PROPERTY: for any value strictly outside `[min, max]`, execute
    /// rejects and the stored entity's vote count is unchanged.
    #[test]
    fn property_out_of_range_rating_never_mutates_stored_entity(
        value in prop_oneof![-1000.0f64..0.99, 5.01f64..1000.0],
    ) {
        let repository: InMemoryRepository<Idea> = InMemoryRepository::new();
        repository.save(&Idea::with_history("idea-1", 10, 4.0)).unwrap();
        let inspection_handle = repository.clone();
        let executor = UseCaseExecutor::new(repository, RatingStrategy::one_to_five());

        let result = executor.execute("idea-1", value);

        prop_assert!(matches!(
            result,
            Err(usecase_core::error::ExecutorError::DomainRejected(_))
        ));
        prop_assert_eq!(inspection_handle.find("idea-1").unwrap().votes(), 10);
    }
}
