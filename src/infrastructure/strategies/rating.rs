//! Rating Strategy
//!
//! A bounded transform strategy for `Idea`: rejects any rating outside a
//! configured inclusive range, otherwise folds it into the idea's running
//! average via `Idea::add_rating`.

use crate::domain::entities::Idea;
use crate::domain::ports::TransformStrategy;
use crate::error::{StrategyError, StrategyResult};

/// Rejects ratings outside `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct RatingStrategy {
    min: f64,
    max: f64,
}

impl RatingStrategy {
    /// `min` and `max` are inclusive bounds on an accepted rating value.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The conventional 1-to-5 star range.
    pub fn one_to_five() -> Self {
        Self::new(1.0, 5.0)
    }
}

impl TransformStrategy<Idea, f64> for RatingStrategy {
    fn apply(&self, entity: &mut Idea, value: f64) -> StrategyResult<()> {
        if !(self.min..=self.max).contains(&value) {
            return Err(StrategyError::Rejected(format!(
                "rating {value} outside allowed range [{}, {}]",
                self.min, self.max
            )));
        }
        entity.add_rating(value);
        Ok(())
    }
}
