//! The [`CatalogStore`] trait defining the read contract for album records.
//!
//! Handlers only ever read the catalog, so the trait carries no write
//! methods; each backend exposes its own loading API for the maintenance
//! path. The trait is synchronous and `Send + Sync` so a single handle can be
//! shared across request tasks without a lock.

use discog_core::AlbumRecord;

use crate::error::StorageError;

/// The read contract for the album catalog.
pub trait CatalogStore: Send + Sync {
    /// Looks up one album by its exact stored title.
    ///
    /// Returns `Ok(None)` when no album has that title.
    fn get(&self, title: &str) -> Result<Option<AlbumRecord>, StorageError>;

    /// Returns every album in arrival order.
    fn scan(&self) -> Result<Vec<AlbumRecord>, StorageError>;

    /// Returns the albums whose release year text equals `release_year`,
    /// in arrival order.
    fn scan_by_year(&self, release_year: &str) -> Result<Vec<AlbumRecord>, StorageError>;
}
