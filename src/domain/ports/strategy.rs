//! Strategy ports - abstractions for substitutable behavior
//!
//! A Strategy is selected once, by the assembler of the system, and injected
//! into a `UseCaseExecutor`. Shared orchestration code never branches on a
//! concrete Strategy's (or a concrete Entity's) kind — adding a new
//! implementation must require zero changes here or in the executor.

use crate::error::StrategyResult;

/// A substitutable unit of behavior that mutates an entity from input
/// parameters, or refuses to.
///
/// Given the same input entity and parameters, a `TransformStrategy` must
/// produce the same categorical effect: it either succeeds or it is
/// rejected for the same documented reason, never both for equivalent
/// inputs.
pub trait TransformStrategy<E, P> {
    /// Apply this strategy's behavior to `entity` using `params`.
    ///
    /// On domain rejection, returns `StrategyError::Rejected` carrying a
    /// reason code — never a bare boolean that hides why.
    fn apply(&self, entity: &mut E, params: P) -> StrategyResult<()>;
}

/// Capability interface for anything a [`MeasureStrategy`] can compute
/// progress over, regardless of concrete kind.
pub trait Measurable {
    /// The amount of progress made so far.
    fn current_amount(&self) -> f64;
    /// The total amount that represents 100% complete.
    fn total_amount(&self) -> f64;
}

/// A substitutable unit of behavior that measures progress as a percentage
/// over any [`Measurable`] item.
///
/// A `MeasureStrategy` implementation never branches on the concrete kind
/// behind the `Measurable` it is given — that is the point of routing
/// through the capability interface instead of inspecting the item.
pub trait MeasureStrategy {
    fn measure(&self, item: &dyn Measurable) -> f64;
}
