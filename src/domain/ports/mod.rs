//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer. The
//! infrastructure layer provides concrete implementations; the domain layer
//! and the executor depend only on the traits here.

pub mod repository;
pub mod strategy;

pub use repository::Repository;
pub use strategy::{Measurable, MeasureStrategy, TransformStrategy};
