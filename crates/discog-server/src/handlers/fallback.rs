//! Fallbacks that keep unmatched requests inside the JSON error envelope.

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Answers requests for paths no route serves.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    tracing::debug!(%method, path = uri.path(), "no route");
    ApiError::NotFound(format!("No route for {} {}", method, uri.path()))
}

/// Answers requests for a known path with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!(
        "Method {} not allowed for {}",
        method,
        uri.path()
    ))
}
