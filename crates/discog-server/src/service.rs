//! CatalogService: the single coordinator between HTTP handlers and the
//! catalog store.
//!
//! Each query operation performs exactly one store call and shapes exactly one
//! response. Handlers are thin wrappers that extract request parts and
//! delegate here, so the proxy adapter and the HTTP router share one
//! implementation.

use std::sync::Arc;

use discog_core::{normalize_title, sort_by_release_year, AlbumView};
use discog_storage::{CatalogStore, StorageError};

use crate::error::{
    ApiError, ALBUM_NOT_FOUND, INVALID_JSON_BODY, MISSING_RELEASE_YEAR, MISSING_TITLE,
};
use crate::schema::albums::AlbumSummaryResponse;

/// Query names accepted for the release year, in priority order.
pub const RELEASE_YEAR_PARAMS: &[&str] = &["release_year", "releaseYear", "year"];

/// Query name for the album title.
pub const TITLE_PARAM: &str = "title";

/// Read-only query operations over an injected catalog store.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        CatalogService { store }
    }

    /// Returns every album, ascending by release year.
    ///
    /// Albums from the same year keep the store's arrival order.
    pub fn list_albums(&self) -> Result<Vec<AlbumView>, ApiError> {
        let mut albums = self
            .store
            .scan()
            .map_err(|e| dependency_failure("scan", e))?;
        sort_by_release_year(&mut albums);
        Ok(albums.iter().map(|album| album.view()).collect())
    }

    /// Returns the albums whose release year equals `release_year` as text.
    pub fn list_albums_by_year(
        &self,
        release_year: Option<&str>,
    ) -> Result<Vec<AlbumView>, ApiError> {
        let year = release_year
            .filter(|y| !y.is_empty())
            .ok_or_else(|| ApiError::BadRequest(MISSING_RELEASE_YEAR.to_string()))?;

        let albums = self
            .store
            .scan_by_year(year)
            .map_err(|e| dependency_failure("scan_by_year", e))?;
        tracing::debug!(release_year = year, matches = albums.len(), "year query");
        Ok(albums.iter().map(|album| album.view()).collect())
    }

    /// Looks up one album by title and builds its summary.
    ///
    /// `body` is the raw request body, if any; `query_title` is the `title`
    /// query parameter, if any. See [`resolve_title`] for precedence.
    pub fn album_summary(
        &self,
        body: Option<&str>,
        query_title: Option<&str>,
    ) -> Result<AlbumSummaryResponse, ApiError> {
        let title = resolve_title(body, query_title)?;
        let key = normalize_title(&title);

        let record = self
            .store
            .get(&key)
            .map_err(|e| dependency_failure("get", e))?
            .ok_or_else(|| {
                tracing::info!(title = %key, "album not found");
                ApiError::NotFound(ALBUM_NOT_FOUND.to_string())
            })?;

        Ok(AlbumSummaryResponse {
            summary: summary_text(&title),
            data: record.data(),
            title,
        })
    }
}

/// Picks the album title from the request.
///
/// A present, non-empty body must be valid JSON; that is checked before
/// anything else. A non-empty string `title` in a JSON object body wins,
/// then a non-empty `title` query parameter.
pub fn resolve_title(body: Option<&str>, query_title: Option<&str>) -> Result<String, ApiError> {
    let from_body = match body.filter(|b| !b.is_empty()) {
        Some(raw) => {
            let parsed: serde_json::Value = serde_json::from_str(raw)
                .map_err(|_| ApiError::BadRequest(INVALID_JSON_BODY.to_string()))?;
            parsed
                .get(TITLE_PARAM)
                .and_then(|t| t.as_str())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        }
        None => None,
    };

    from_body
        .or_else(|| {
            query_title
                .filter(|t| !t.is_empty())
                .map(str::to_string)
        })
        .ok_or_else(|| ApiError::BadRequest(MISSING_TITLE.to_string()))
}

/// Placeholder summary sentence for an album.
pub fn summary_text(title: &str) -> String {
    format!("The album '{}' is a masterpiece of modern music.", title)
}

fn dependency_failure(operation: &'static str, err: StorageError) -> ApiError {
    tracing::error!(operation, error = %err, "catalog store call failed");
    ApiError::from(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use discog_core::AlbumRecord;
    use discog_storage::InMemoryStore;

    fn service() -> CatalogService {
        let store = InMemoryStore::from_records(vec![
            AlbumRecord::new(
                "Lemonade",
                "2016",
                "R&B",
                vec!["Formation".into()],
                "https://covers.example.com/lemonade.jpg",
            ),
            AlbumRecord::new(
                "B'day",
                "2006",
                "R&B",
                vec!["Deja Vu".into()],
                "https://covers.example.com/bday.jpg",
            ),
        ]);
        CatalogService::new(Arc::new(store))
    }

    #[test]
    fn body_title_wins_over_query() {
        let title = resolve_title(Some(r#"{"title": "lemonade"}"#), Some("B'day")).unwrap();
        assert_eq!(title, "lemonade");
    }

    #[test]
    fn falls_back_to_query_title() {
        assert_eq!(resolve_title(None, Some("4")).unwrap(), "4");
        assert_eq!(resolve_title(Some(""), Some("4")).unwrap(), "4");
        assert_eq!(resolve_title(Some("{}"), Some("4")).unwrap(), "4");
        assert_eq!(resolve_title(Some(r#"{"title": ""}"#), Some("4")).unwrap(), "4");
        assert_eq!(resolve_title(Some(r#"{"title": 4}"#), Some("4")).unwrap(), "4");
        assert_eq!(resolve_title(Some("[1, 2]"), Some("4")).unwrap(), "4");
    }

    #[test]
    fn invalid_json_is_checked_first() {
        let err = resolve_title(Some("{bad json"), Some("Lemonade")).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == INVALID_JSON_BODY));
    }

    #[test]
    fn missing_title() {
        let err = resolve_title(None, None).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == MISSING_TITLE));
        let err = resolve_title(Some(r#"{"name": "x"}"#), Some("")).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == MISSING_TITLE));
    }

    #[test]
    fn summary_echoes_original_title() {
        let response = service()
            .album_summary(Some(r#"{"title": "  lemonade  "}"#), None)
            .unwrap();
        assert_eq!(response.title, "  lemonade  ");
        assert_eq!(response.data.genre, "R&B");
        assert_eq!(
            response.summary,
            "The album '  lemonade  ' is a masterpiece of modern music."
        );
    }

    #[test]
    fn unknown_title_is_not_found() {
        let err = service().album_summary(None, Some("renaissance")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref m) if m == ALBUM_NOT_FOUND));
    }

    #[test]
    fn list_is_sorted_by_year() {
        let albums = service().list_albums().unwrap();
        let titles: Vec<&str> = albums.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["B'day", "Lemonade"]);
    }

    #[test]
    fn year_query_requires_year() {
        let err = service().list_albums_by_year(None).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref m) if m == MISSING_RELEASE_YEAR));
        let err = service().list_albums_by_year(Some("")).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(service().list_albums_by_year(Some("2006")).unwrap().len(), 1);
    }
}
