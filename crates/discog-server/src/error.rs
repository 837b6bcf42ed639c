//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all endpoints. It implements
//! `axum::response::IntoResponse` to produce the `{"error": <message>}`
//! envelope with the matching HTTP status code, so every failure reaches the
//! caller as a well-formed JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Message for a year query without a year.
pub const MISSING_RELEASE_YEAR: &str = "Missing releaseYear query parameter";
/// Message for a summary request that names no album.
pub const MISSING_TITLE: &str = "Missing album title in the request";
/// Message for a request body that does not parse as JSON.
pub const INVALID_JSON_BODY: &str = "Invalid JSON in body";
/// Message for a title lookup that finds nothing.
pub const ALBUM_NOT_FOUND: &str = "Album not found in the database";

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed input (400).
    #[error("{0}")]
    BadRequest(String),

    /// No matching record or route (404).
    #[error("{0}")]
    NotFound(String),

    /// Known path, unsupported method (405).
    #[error("{0}")]
    MethodNotAllowed(String),

    /// The catalog store failed or returned something unusable (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<discog_storage::StorageError> for ApiError {
    fn from(err: discog_storage::StorageError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
