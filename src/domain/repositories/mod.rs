//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the persistent store. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`CounterRepository`] - Atomic per-namespace sequence counters
//! - [`ShortLinkRepository`] - Short link storage and lookups
//!
//! # Testing
//!
//! See integration tests in `tests/repository_pg.rs` for usage examples.

pub mod counter_repository;
pub mod short_link_repository;

pub use counter_repository::CounterRepository;
pub use short_link_repository::ShortLinkRepository;

#[cfg(test)]
pub use counter_repository::MockCounterRepository;
#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
