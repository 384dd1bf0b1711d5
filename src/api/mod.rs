//! HTTP API layer.
//!
//! Translates requests into calls on the core services and formats responses
//! according to the short URL contract.
//!
//! # Modules
//!
//! - [`dto`] - Request/response types and the body extractor
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
