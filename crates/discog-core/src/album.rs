//! Album records and their public projections.
//!
//! [`AlbumRecord`] is the full record as kept by the catalog, including any
//! incidental attributes the store carries alongside the public fields.
//! [`AlbumView`] and [`AlbumData`] are the fixed-shape projections handed to
//! callers; serde emits struct fields in declaration order, which fixes the
//! JSON field order of every response.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::title::normalize_title;
use crate::year::ReleaseYear;

/// One album in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumRecord {
    /// Unique key, matched exactly against normalized caller input.
    pub title: String,
    /// Secondary key for year queries.
    pub release_year: ReleaseYear,
    pub genre: String,
    /// Track titles in album order.
    pub tracklist: Vec<String>,
    /// Location of the externally hosted cover image.
    pub album_url: String,
    /// Store-internal attributes. Kept on the record, never projected.
    #[serde(flatten)]
    pub attributes: IndexMap<String, serde_json::Value>,
}

/// Public view of an album, as returned by the listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumView {
    pub title: String,
    pub release_year: ReleaseYear,
    pub genre: String,
    pub tracklist: Vec<String>,
    pub album_url: String,
}

/// Album details without the title, as embedded in a summary response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumData {
    pub release_year: ReleaseYear,
    pub genre: String,
    pub tracklist: Vec<String>,
    pub album_url: String,
}

impl AlbumRecord {
    /// Creates a record with no extra attributes.
    pub fn new(
        title: impl Into<String>,
        release_year: impl Into<ReleaseYear>,
        genre: impl Into<String>,
        tracklist: Vec<String>,
        album_url: impl Into<String>,
    ) -> Self {
        AlbumRecord {
            title: title.into(),
            release_year: release_year.into(),
            genre: genre.into(),
            tracklist,
            album_url: album_url.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Projects the record onto the public field set.
    pub fn view(&self) -> AlbumView {
        AlbumView {
            title: self.title.clone(),
            release_year: self.release_year.clone(),
            genre: self.genre.clone(),
            tracklist: self.tracklist.clone(),
            album_url: self.album_url.clone(),
        }
    }

    /// Projects the record onto the public field set minus the title.
    pub fn data(&self) -> AlbumData {
        AlbumData {
            release_year: self.release_year.clone(),
            genre: self.genre.clone(),
            tracklist: self.tracklist.clone(),
            album_url: self.album_url.clone(),
        }
    }

    /// Checks the record is fit to be written to the catalog.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::EmptyTitle);
        }
        let expected = normalize_title(&self.title);
        if expected != self.title {
            return Err(CoreError::UnnormalizedTitle {
                title: self.title.clone(),
                expected,
            });
        }
        if self.release_year.is_blank() {
            return Err(CoreError::EmptyReleaseYear {
                title: self.title.clone(),
            });
        }
        url::Url::parse(&self.album_url).map_err(|e| CoreError::InvalidAlbumUrl {
            title: self.title.clone(),
            url: self.album_url.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

/// Sorts records ascending by release year.
///
/// The sort is stable: albums from the same year keep their arrival order.
pub fn sort_by_release_year(records: &mut [AlbumRecord]) {
    records.sort_by(|a, b| a.release_year.cmp_value(&b.release_year));
}
