//! usecase-core - a pluggable use-case execution core
//!
//! A request enters, is resolved against an injected Repository
//! abstraction, has a business rule applied through an injected Strategy,
//! and is persisted back — with both the concrete persistence mechanism and
//! the concrete business behavior substitutable without touching the
//! orchestrating code.
//!
//! ```
//! use usecase_core::domain::entities::Idea;
//! use usecase_core::domain::ports::Repository;
//! use usecase_core::domain::services::UseCaseExecutor;
//! use usecase_core::infrastructure::repositories::InMemoryRepository;
//! use usecase_core::infrastructure::strategies::RatingStrategy;
//!
//! let repository: InMemoryRepository<Idea> = InMemoryRepository::new();
//! repository.save(&Idea::new("idea-1")).unwrap();
//!
//! let executor = UseCaseExecutor::new(repository, RatingStrategy::one_to_five());
//! let idea = executor.execute("idea-1", 5.0).unwrap();
//! assert_eq!(idea.votes(), 1);
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::entities::{Idea, Invoice};
pub use domain::ports::{Measurable, MeasureStrategy, Repository, TransformStrategy};
pub use domain::services::UseCaseExecutor;
pub use error::{ExecutorError, RepositoryError, StrategyError};
