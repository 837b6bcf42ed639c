//! Proxy-event adapter.
//!
//! [`invoke`] answers one API-Gateway-style event by converting it into an
//! HTTP request, running it through the same [`Router`] the server uses, and
//! collecting the response into a [`ProxyResponse`]. Routing and handler
//! behavior are therefore identical for both entry points.

use std::collections::BTreeMap;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use url::form_urlencoded;

use crate::error::ErrorBody;
use crate::schema::proxy::{ProxyRequest, ProxyResponse};

/// Runs one proxy event through `router`.
///
/// Never fails: an event that cannot be turned into a request is answered
/// with a 400 envelope, like any other bad input.
pub async fn invoke(router: &Router, event: ProxyRequest) -> ProxyResponse {
    let request = match to_http_request(&event) {
        Ok(request) => request,
        Err(message) => {
            tracing::warn!(method = %event.http_method, path = %event.path, %message, "rejected proxy event");
            return error_response(StatusCode::BAD_REQUEST, message);
        }
    };

    let response = match router.clone().oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    let status_code = response.status().as_u16();
    let headers = flatten_headers(response.headers());

    // The handler's body is forwarded whole, however large.
    match axum::body::to_bytes(response.into_body(), usize::MAX).await {
        Ok(bytes) => ProxyResponse {
            status_code,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        },
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("failed to read response body: {}", e),
        ),
    }
}

/// Collapses a header map into one string per name.
///
/// Repeated names are joined with `", "` in the order they were added.
/// Values that are not visible ASCII are skipped.
fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut flat: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        flat.entry(name.as_str().to_string())
            .and_modify(|joined| {
                joined.push_str(", ");
                joined.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    flat
}

/// Converts a proxy event into an HTTP request for the router.
fn to_http_request(event: &ProxyRequest) -> Result<Request<Body>, String> {
    if !event.path.starts_with('/') {
        return Err(format!("Invalid path '{}'", event.path));
    }

    let mut uri = event.path.clone();
    if let Some(params) = event
        .query_string_parameters
        .as_ref()
        .filter(|p| !p.is_empty())
    {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter())
            .finish();
        uri.push('?');
        uri.push_str(&query);
    }

    let mut builder = Request::builder()
        .method(event.http_method.to_ascii_uppercase().as_str())
        .uri(uri);
    let body = match &event.body {
        Some(body) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(body.clone())
        }
        None => Body::empty(),
    };

    builder
        .body(body)
        .map_err(|e| format!("Invalid request: {}", e))
}

fn error_response(status: StatusCode, message: String) -> ProxyResponse {
    let body = serde_json::to_string(&ErrorBody { error: message })
        .unwrap_or_else(|_| "{\"error\":\"internal error\"}".to_string());
    let mut headers = BTreeMap::new();
    headers.insert(CONTENT_TYPE.as_str().to_string(), "application/json".to_string());
    ProxyResponse {
        status_code: status.as_u16(),
        headers,
        body,
    }
}
