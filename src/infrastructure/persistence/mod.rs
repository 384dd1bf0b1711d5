//! Repository implementations.
//!
//! # Repositories
//!
//! - [`PgCounterRepository`] - Atomic counters in PostgreSQL
//! - [`PgShortLinkRepository`] - Link storage and retrieval in PostgreSQL
//! - [`MemoryStore`] - In-process store implementing both traits, for tests
//!   and database-less local runs

pub mod memory_store;
pub mod pg_counter_repository;
pub mod pg_short_link_repository;

pub use memory_store::MemoryStore;
pub use pg_counter_repository::PgCounterRepository;
pub use pg_short_link_repository::PgShortLinkRepository;
