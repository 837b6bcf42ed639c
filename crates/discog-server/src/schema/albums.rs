//! Album endpoint response types.
//!
//! Listing endpoints return `Vec<discog_core::AlbumView>` directly; only the
//! summary endpoint needs a wrapper.

use discog_core::AlbumData;
use serde::Serialize;

/// Response from `GetAlbumSummary`.
#[derive(Debug, Clone, Serialize)]
pub struct AlbumSummaryResponse {
    /// The title exactly as the caller sent it, before normalization.
    pub title: String,
    /// Album details copied from the catalog record.
    pub data: AlbumData,
    /// Generated one-line summary.
    pub summary: String,
}
