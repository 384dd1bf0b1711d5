//! Application layer services implementing the short-link pipeline.
//!
//! Services consume repository traits and expose the two operations the HTTP
//! layer needs: register a URL and resolve a code.
//!
//! # Available Services
//!
//! - [`services::url_validator::UrlValidator`] - Accepts or rejects submitted URLs
//! - [`services::sequence_allocator::SequenceAllocator`] - Atomic per-namespace sequences
//! - [`services::link_registry::LinkRegistry`] - Deduplicating registration
//! - [`services::resolver::Resolver`] - Code lookup with read-through cache

pub mod services;
