//! Domain Entities
//!
//! Mutable domain records with identity and invariant-preserving mutators.
//! - `Idea` — a rateable entity (votes + running-average rating)
//! - `Invoice` — a discountable entity (total + applied discount)

mod idea;
mod invoice;

pub use idea::Idea;
pub use invoice::Invoice;

/// Capability shared by every concrete Entity: a stable, opaque identity.
///
/// Repository and Executor code is generic over this trait, never over a
/// concrete entity's kind.
pub trait Identifiable {
    fn id(&self) -> &str;
}
