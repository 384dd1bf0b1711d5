//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use url::Url;

use crate::domain::entities::parse_short_code;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{code}`
///
/// # Response
///
/// `302 Found` with `Location` set to the registered URL.
///
/// # Errors
///
/// - `400 {"error": "Wrong format"}` if `code` is not an integer
/// - `404 {"error": "No short URL found"}` if no link has this code
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    let code = parse_short_code(&code)?;

    let link = match state.resolver.resolve(code).await {
        Ok(link) => link,
        Err(e) => {
            if matches!(e, AppError::NotFound { .. }) {
                metrics::counter!("shorturl_not_found_total").increment(1);
            }
            return Err(e);
        }
    };

    let location = location_header(&link.original_url)?;
    metrics::counter!("shorturl_redirects_total").increment(1);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value for a stored URL.
///
/// ASCII URLs are sent verbatim. Non-ASCII URLs, and strings that are not a
/// legal header value (e.g. a line break the URL parser ignores), are sent in
/// their parsed and serialized form: punycode host, percent-encoded path.
fn location_header(original_url: &str) -> Result<HeaderValue, AppError> {
    if original_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(original_url)
    {
        return Ok(value);
    }

    let serialized = Url::parse(original_url)
        .map_err(|e| AppError::internal(format!("stored URL no longer parses: {}", e)))?;

    HeaderValue::from_str(serialized.as_str())
        .map_err(|e| AppError::internal(format!("stored URL is not a valid header: {}", e)))
}
