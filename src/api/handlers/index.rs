//! Usage banner served at the root path.

/// Plain-text description of the service endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> &'static str {
    "URL Shortener Microservice\n\
     POST /api/shorturl  (x-www-form-urlencoded: url=https://example.com)\n\
     GET  /api/shorturl/{code}  -> 302 redirect\n"
}
