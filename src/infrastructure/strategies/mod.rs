//! Strategy Implementations
//!
//! Concrete behaviors implementing the `TransformStrategy`/`MeasureStrategy`
//! ports. Adding a new one here requires no change to the
//! `UseCaseExecutor` or to any other implementation.

mod discount;
mod progress;
mod rating;

pub use discount::DiscountStrategy;
pub use progress::ProgressStrategy;
pub use rating::RatingStrategy;
