//! Router assembly for the discog HTTP API.
//!
//! [`build_router`] wires the album handlers to their routes with CORS and
//! tracing middleware layers. The routing layer does no business logic: it
//! forwards each handler's status, headers and body unchanged.

use axum::extract::Request;
use axum::http::Method;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::schema::query::QueryParams;
use crate::service::{RELEASE_YEAR_PARAMS, TITLE_PARAM};
use crate::state::AppState;

/// What the routing layer expects of a request to one route.
///
/// The expectation is advisory: a request that misses the expected query
/// parameter is logged and still forwarded, and the handler decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteContract {
    pub method: &'static str,
    pub path: &'static str,
    /// Query names of which at least one is expected. Empty means none.
    pub expected_query: &'static [&'static str],
}

/// Every route the front door serves.
pub const ROUTE_CONTRACTS: &[RouteContract] = &[
    RouteContract {
        method: "GET",
        path: "/albums",
        expected_query: &[],
    },
    RouteContract {
        method: "GET",
        path: "/albums/year",
        expected_query: RELEASE_YEAR_PARAMS,
    },
    RouteContract {
        method: "GET",
        path: "/albums/summary",
        expected_query: &[TITLE_PARAM],
    },
    RouteContract {
        method: "POST",
        path: "/albums/summary",
        expected_query: &[],
    },
];

/// Finds the contract for a method and path, if the route exists.
pub fn route_contract(method: &Method, path: &str) -> Option<&'static RouteContract> {
    ROUTE_CONTRACTS
        .iter()
        .find(|contract| contract.method == method.as_str() && contract.path == path)
}

/// Builds the complete axum router with all API routes.
///
/// CORS is permissive (the API is public and read-only).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ListAlbums
        .route(
            "/albums",
            get(handlers::albums::list_albums)
                .fallback(handlers::fallback::method_not_allowed),
        )
        // ListAlbumsByYear
        .route(
            "/albums/year",
            get(handlers::albums::list_albums_by_year)
                .fallback(handlers::fallback::method_not_allowed),
        )
        // GetAlbumSummary
        .route(
            "/albums/summary",
            get(handlers::albums::album_summary)
                .post(handlers::albums::album_summary)
                .fallback(handlers::fallback::method_not_allowed),
        )
        .route_layer(middleware::from_fn(check_route_contract))
        .fallback(handlers::fallback::route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Logs requests that miss the query parameter their route expects.
async fn check_route_contract(request: Request, next: Next) -> Response {
    if let Some(contract) = route_contract(request.method(), request.uri().path()) {
        if !contract.expected_query.is_empty() {
            let params = QueryParams::parse(request.uri().query());
            if params.first_of(contract.expected_query).is_none() {
                tracing::warn!(
                    method = %request.method(),
                    path = contract.path,
                    expected = ?contract.expected_query,
                    "request lacks the expected query parameter; forwarding to handler"
                );
            }
        }
    }
    next.run(request).await
}
