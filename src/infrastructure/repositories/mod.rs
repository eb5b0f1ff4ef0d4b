//! Repository Implementations
//!
//! Concrete implementations of the `Repository` port, one per storage
//! technology. Each must honor the exact error taxonomy of
//! `domain::ports::Repository` so a `UseCaseExecutor` can be pointed at any
//! of them without code changes.

mod file;
mod memory;
mod remote;

pub use file::FileRepository;
pub use memory::InMemoryRepository;
pub use remote::RemoteRepository;
