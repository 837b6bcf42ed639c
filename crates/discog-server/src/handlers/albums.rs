//! Album query handlers.

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::Json;

use discog_core::AlbumView;

use crate::error::{ApiError, INVALID_JSON_BODY};
use crate::schema::albums::AlbumSummaryResponse;
use crate::schema::query::QueryParams;
use crate::service::{RELEASE_YEAR_PARAMS, TITLE_PARAM};
use crate::state::AppState;

/// Lists every album, oldest first.
///
/// `GET /albums`
pub async fn list_albums(
    State(state): State<AppState>,
) -> Result<Json<Vec<AlbumView>>, ApiError> {
    let albums = state.service.list_albums()?;
    Ok(Json(albums))
}

/// Lists the albums released in one year.
///
/// `GET /albums/year?release_year=2008`
pub async fn list_albums_by_year(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<AlbumView>>, ApiError> {
    let params = QueryParams::parse(query.as_deref());
    let albums = state
        .service
        .list_albums_by_year(params.first_of(RELEASE_YEAR_PARAMS))?;
    Ok(Json(albums))
}

/// Summarizes one album named in the JSON body or the `title` parameter.
///
/// `GET /albums/summary?title=Lemonade`
/// `POST /albums/summary` with `{"title": "Lemonade"}`
pub async fn album_summary(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<Json<AlbumSummaryResponse>, ApiError> {
    let params = QueryParams::parse(query.as_deref());
    let body = if body.is_empty() {
        None
    } else {
        // A body that is not UTF-8 cannot be JSON either.
        Some(
            std::str::from_utf8(&body)
                .map_err(|_| ApiError::BadRequest(INVALID_JSON_BODY.to_string()))?,
        )
    };
    let response = state.service.album_summary(body, params.get(TITLE_PARAM))?;
    Ok(Json(response))
}
