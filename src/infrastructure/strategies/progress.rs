//! Progress Strategy
//!
//! A measure strategy: computes percent complete over any [`Measurable`]
//! item, without branching on the concrete kind behind it.

use crate::domain::ports::{Measurable, MeasureStrategy};

/// Percent complete, clamped to `[0.0, 100.0]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressStrategy;

impl MeasureStrategy for ProgressStrategy {
    fn measure(&self, item: &dyn Measurable) -> f64 {
        let total = item.total_amount();
        if total <= 0.0 {
            return 0.0;
        }
        (item.current_amount() / total * 100.0).clamp(0.0, 100.0)
    }
}
