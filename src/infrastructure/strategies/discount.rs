//! Discount Strategy
//!
//! A bounded transform strategy for `Invoice`: rejects a discount
//! percentage outside `[0, 100]`, otherwise delegates to
//! `Invoice::apply_discount`. Demonstrates the Strategy abstraction applied
//! to a second, unrelated entity type with no change to
//! `UseCaseExecutor`.

use crate::domain::entities::Invoice;
use crate::domain::ports::TransformStrategy;
use crate::error::{StrategyError, StrategyResult};

/// Rejects a discount percentage outside `[0, 100]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountStrategy;

impl TransformStrategy<Invoice, f64> for DiscountStrategy {
    fn apply(&self, entity: &mut Invoice, percent: f64) -> StrategyResult<()> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(StrategyError::Rejected(format!(
                "discount {percent}% outside allowed range [0, 100]"
            )));
        }
        entity.apply_discount(percent);
        Ok(())
    }
}
