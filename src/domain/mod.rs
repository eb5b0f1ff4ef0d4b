//! Domain layer
//!
//! Entities, ports (capability interfaces), and services that have no I/O
//! dependencies of their own and are easily testable in isolation.

pub mod entities;
pub mod ports;
pub mod services;
