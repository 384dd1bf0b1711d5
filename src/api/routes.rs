//! API route configuration.

use crate::api::handlers::{create_short_url_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short URL routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorturl`         - Register a URL (form or JSON body)
/// - `GET  /shorturl/{code}`  - 302 redirect to the registered URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(create_short_url_handler))
        .route("/shorturl/{code}", get(redirect_handler))
}
