//! Handler for short URL registration.

use axum::{Json, extract::State};

use crate::api::dto::shorturl::{ShortUrlResponse, ShortenPayload};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a URL and returns its integer short code.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// `application/x-www-form-urlencoded` (`url=https://example.com`) or JSON:
///
/// ```json
/// { "url": "https://www.freecodecamp.org" }
/// ```
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
///
/// Submitting the same URL again returns the same code.
///
/// # Errors
///
/// - `200 {"error": "invalid url"}` if the URL is rejected (nothing is stored)
/// - `500` if the store fails
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    ShortenPayload(payload): ShortenPayload,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let raw = payload.into_url()?;
    let url = state.url_validator.validate(&raw).await?;
    let link = state.link_registry.register(url).await?;

    Ok(Json(ShortUrlResponse::from(link)))
}
