//! Business logic services for the application layer.

pub mod link_registry;
pub mod resolver;
pub mod sequence_allocator;
pub mod url_validator;

pub use link_registry::LinkRegistry;
pub use resolver::Resolver;
pub use sequence_allocator::SequenceAllocator;
pub use url_validator::UrlValidator;
