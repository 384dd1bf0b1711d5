//! DTOs for the short URL endpoints.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::entities::ShortLink;
use crate::error::AppError;

/// Body of `POST /api/shorturl`.
///
/// `url` is optional at the type level so that a missing field is reported
/// as an invalid URL rather than as a deserialization failure.
///
/// The `length` bound counts characters. The byte limit
/// ([`crate::domain::valid_url::MAX_URL_LENGTH`]) is enforced afterwards by
/// [`crate::domain::valid_url::ValidUrl::parse`], so multi-byte input under
/// 2048 characters can still be rejected there.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, max = 2048))]
    pub url: Option<String>,
}

impl ShortenRequest {
    /// Returns the submitted URL after the bounds check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if `url` is absent, empty or too long.
    pub fn into_url(self) -> Result<String, AppError> {
        self.validate()
            .map_err(|e| AppError::invalid_url(e.to_string()))?;
        self.url
            .ok_or_else(|| AppError::invalid_url("missing 'url' field"))
    }
}

/// Extracts a [`ShortenRequest`] from either a JSON or a URL-encoded form body.
///
/// A body that cannot be decoded, or a JSON `url` that is not a string,
/// yields an empty request instead of a rejection; the handler then answers
/// with the invalid URL response.
#[derive(Debug)]
pub struct ShortenPayload(pub ShortenRequest);

impl<S> FromRequest<S> for ShortenPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json") || ct.contains("+json"));

        let request = if is_json {
            match Json::<Value>::from_request(req, state).await {
                Ok(Json(body)) => ShortenRequest {
                    url: body.get("url").and_then(Value::as_str).map(str::to_owned),
                },
                Err(rejection) => {
                    tracing::debug!(error = %rejection, "undecodable JSON body");
                    ShortenRequest::default()
                }
            }
        } else {
            match Form::<ShortenRequest>::from_request(req, state).await {
                Ok(Form(form)) => form,
                Err(rejection) => {
                    tracing::debug!(error = %rejection, "undecodable form body");
                    ShortenRequest::default()
                }
            }
        };

        Ok(Self(request))
    }
}

/// Successful registration response.
///
/// `short_url` is the integer code, not a full URL.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortUrlResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<ShortLink> for ShortUrlResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            original_url: link.original_url,
            short_url: link.short_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use chrono::Utc;

    async fn extract(content_type: Option<&str>, body: &'static str) -> ShortenRequest {
        let mut builder = Request::builder().method("POST").uri("/api/shorturl");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        ShortenPayload::from_request(req, &()).await.unwrap().0
    }

    #[tokio::test]
    async fn test_extracts_form_body() {
        let req = extract(
            Some("application/x-www-form-urlencoded"),
            "url=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc",
        )
        .await;
        assert_eq!(req.url.as_deref(), Some("https://example.com/a?b=c"));
    }

    #[tokio::test]
    async fn test_extracts_json_body() {
        let req = extract(Some("application/json"), r#"{"url":"https://example.com"}"#).await;
        assert_eq!(req.url.as_deref(), Some("https://example.com"));
    }

    #[tokio::test]
    async fn test_non_string_json_url_is_missing() {
        let req = extract(Some("application/json"), r#"{"url":42}"#).await;
        assert!(req.url.is_none());
    }

    #[tokio::test]
    async fn test_malformed_bodies_are_empty() {
        assert!(extract(Some("application/json"), "{not json").await.url.is_none());
        assert!(extract(None, "url=https://example.com").await.url.is_none());
    }

    #[test]
    fn test_into_url_bounds() {
        let missing = ShortenRequest { url: None };
        assert!(matches!(
            missing.into_url(),
            Err(AppError::InvalidUrl { .. })
        ));

        let empty = ShortenRequest {
            url: Some(String::new()),
        };
        assert!(empty.into_url().is_err());

        let too_long = ShortenRequest {
            url: Some(format!("https://example.com/{}", "a".repeat(2048))),
        };
        assert!(too_long.into_url().is_err());

        let ok = ShortenRequest {
            url: Some("https://example.com".to_string()),
        };
        assert_eq!(ok.into_url().unwrap(), "https://example.com");
    }

    #[test]
    fn test_multibyte_url_passes_char_bound_but_not_byte_limit() {
        use crate::domain::valid_url::{UrlValidationError, ValidUrl};

        let url = format!("https://example.com/{}", "é".repeat(1500));
        assert!(url.chars().count() <= 2048);
        assert!(url.len() > 2048);

        let accepted = ShortenRequest { url: Some(url) }.into_url().unwrap();
        assert!(matches!(
            ValidUrl::parse(&accepted),
            Err(UrlValidationError::TooLong(_))
        ));
    }

    #[test]
    fn test_response_from_link() {
        let link = ShortLink::new(1, "https://www.freecodecamp.org".to_string(), 1, Utc::now());
        let response = ShortUrlResponse::from(link);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({ "original_url": "https://www.freecodecamp.org", "short_url": 1 })
        );
    }
}
