//! ShortLink entity representing a registered URL mapping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A registered mapping between an integer short code and the original URL.
///
/// Links are immutable once persisted. `original_url` is exactly the string
/// that was accepted by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    pub id: i64,
    pub original_url: String,
    pub short_code: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: i64, original_url: String, short_code: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            original_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for persisting a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub original_url: String,
    pub short_code: i64,
}

/// Parses the path segment of a redirect request into a short code.
///
/// Only plain decimal integers are accepted, optionally with a leading `-`;
/// anything else (including a leading `+`) fails closed.
///
/// # Errors
///
/// Returns [`AppError::InvalidCode`] when `input` is not an integer.
pub fn parse_short_code(input: &str) -> Result<i64, AppError> {
    if !input.starts_with(|c: char| c.is_ascii_digit() || c == '-') {
        return Err(AppError::invalid_code(input));
    }

    input
        .parse::<i64>()
        .map_err(|_| AppError::invalid_code(input))
}
