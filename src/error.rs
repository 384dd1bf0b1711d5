//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service returns [`AppError`]. Handlers
//! propagate it with `?` and Axum renders it through [`IntoResponse`] as a
//! `{ "error": "<message>" }` body.
//!
//! # Status mapping
//!
//! | Variant        | Status | Body                               |
//! |----------------|--------|------------------------------------|
//! | `InvalidUrl`   | 200    | `{"error": "invalid url"}`         |
//! | `InvalidCode`  | 400    | `{"error": "Wrong format"}`        |
//! | `NotFound`     | 404    | `{"error": "No short URL found"}`  |
//! | `Allocation`   | 500    | `{"error": "Internal server error"}` |
//! | `Store`        | 500    | `{"error": "Internal server error"}` |
//! | `Internal`     | 500    | `{"error": "Internal server error"}` |
//!
//! Rejected URLs answer with `200 OK`: clients of the short URL contract
//! inspect the body, not the status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Submitted string is not an acceptable absolute http/https URL.
    #[error("invalid url")]
    InvalidUrl { reason: String },

    /// Path segment could not be parsed as a short code.
    #[error("Wrong format")]
    InvalidCode { input: String },

    /// No short link is registered under the code.
    #[error("No short URL found")]
    NotFound { code: i64 },

    /// The sequence counter could not be advanced.
    #[error("failed to allocate next value for namespace '{namespace}': {message}")]
    Allocation { namespace: String, message: String },

    /// A store round trip failed.
    #[error("store error: {message}")]
    Store { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }

    pub fn invalid_code(input: impl Into<String>) -> Self {
        Self::InvalidCode {
            input: input.into(),
        }
    }

    pub fn not_found(code: i64) -> Self {
        Self::NotFound { code }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status used when this error is rendered.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. } => StatusCode::OK,
            AppError::InvalidCode { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Allocation { .. } | AppError::Store { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns true for failures caused by the store or the process, as opposed to the caller.
    pub fn is_server_error(&self) -> bool {
        self.status().is_server_error()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::store(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if self.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            tracing::debug!(error = ?self, "request rejected");
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_url_is_ok_status() {
        let (status, body) = body_json(AppError::invalid_url("ftp scheme")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"], "invalid url");
    }

    #[tokio::test]
    async fn test_invalid_code_is_bad_request() {
        let (status, body) = body_json(AppError::invalid_code("abc")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Wrong format");
    }

    #[tokio::test]
    async fn test_not_found() {
        let (status, body) = body_json(AppError::not_found(999)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No short URL found");
    }

    #[tokio::test]
    async fn test_store_error_hides_details() {
        let (status, body) = body_json(AppError::store("connection refused")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");

        let (status, _) = body_json(AppError::Allocation {
            namespace: "short".to_string(),
            message: "pool timed out".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
