//! Core error types for discog-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering the
//! ways an album record can fail validation before it enters the catalog.

use thiserror::Error;

/// Core errors produced by the discog-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The record's title is empty or only whitespace.
    #[error("album title must not be empty")]
    EmptyTitle,

    /// The title is not in the form lookups normalize caller input to.
    #[error("album title '{title}' is not normalized (expected '{expected}')")]
    UnnormalizedTitle { title: String, expected: String },

    /// The record's release year is empty.
    #[error("album '{title}' has an empty release year")]
    EmptyReleaseYear { title: String },

    /// The cover URL is not an absolute URL.
    #[error("album '{title}' has an invalid album_url '{url}': {reason}")]
    InvalidAlbumUrl {
        title: String,
        url: String,
        reason: String,
    },
}
