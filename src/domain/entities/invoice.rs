//! Invoice entity
//!
//! A discountable record: `discount_cents` is only ever set through
//! `apply_discount`, as a pure function of `total_cents` and a percentage.

use serde::{Deserialize, Serialize};

use super::Identifiable;

/// An invoice that can have a discount applied to its total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    id: String,
    total_cents: u64,
    discount_cents: u64,
}

impl Invoice {
    pub fn new(id: impl Into<String>, total_cents: u64) -> Self {
        Self {
            id: id.into(),
            total_cents,
            discount_cents: 0,
        }
    }

    pub fn total_cents(&self) -> u64 {
        self.total_cents
    }

    pub fn discount_cents(&self) -> u64 {
        self.discount_cents
    }

    /// Amount payable after the currently applied discount.
    pub fn net_cents(&self) -> u64 {
        self.total_cents.saturating_sub(self.discount_cents)
    }

    /// Set the discount as `percent`% of `total_cents`, as a single step.
    ///
    /// Callers that need to reject an out-of-range percentage should do so
    /// in a `Strategy` before calling this.
    pub fn apply_discount(&mut self, percent: f64) {
        self.discount_cents = (self.total_cents as f64 * percent / 100.0).round() as u64;
    }
}

impl Identifiable for Invoice {
    fn id(&self) -> &str {
        &self.id
    }
}
