//! Infrastructure layer
//!
//! Concrete implementations of the domain ports: repositories backed by
//! different storage technologies and strategies implementing concrete
//! business behavior. The domain layer has no dependency on this module;
//! this module depends on the domain layer's traits.

pub mod config;
pub mod repositories;
pub mod strategies;
