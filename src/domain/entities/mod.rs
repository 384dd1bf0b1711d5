//! Core domain entities.
//!
//! - [`ShortLink`] - A registered URL and its integer short code
//! - [`Counter`] - The persisted state of a sequence namespace
//!
//! Entities are plain data. `NewShortLink` carries the fields of a link that
//! has not been persisted yet.

pub mod counter;
pub mod short_link;

pub use counter::{Counter, SHORT_LINK_NAMESPACE};
pub use short_link::{NewShortLink, ShortLink, parse_short_code};
