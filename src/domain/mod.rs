//! Domain layer containing business entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (`ShortLink`, `Counter`)
//! - [`repositories`] - Data access trait definitions
//! - [`valid_url`] - Syntactic URL acceptance and the [`valid_url::ValidUrl`] newtype
//! - [`host_resolver`] - Hostname resolution contract used by the optional DNS check
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod host_resolver;
pub mod repositories;
pub mod valid_url;
