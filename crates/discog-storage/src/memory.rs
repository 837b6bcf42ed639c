//! In-memory implementation of [`CatalogStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and ephemeral
//! sessions. Albums live in an insertion-ordered map keyed by title, giving
//! the same arrival-order semantics as the SQLite backend.

use indexmap::IndexMap;

use discog_core::AlbumRecord;

use crate::error::StorageError;
use crate::traits::CatalogStore;

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    albums: IndexMap<String, AlbumRecord>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from records in arrival order.
    ///
    /// A later record with the same title replaces the earlier one in place.
    pub fn from_records(records: impl IntoIterator<Item = AlbumRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Inserts or replaces an album. Replacing keeps its arrival position.
    pub fn insert(&mut self, record: AlbumRecord) {
        self.albums.insert(record.title.clone(), record);
    }

    /// Number of albums held.
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    /// True if the store holds no albums.
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }
}

impl CatalogStore for InMemoryStore {
    fn get(&self, title: &str) -> Result<Option<AlbumRecord>, StorageError> {
        Ok(self.albums.get(title).cloned())
    }

    fn scan(&self) -> Result<Vec<AlbumRecord>, StorageError> {
        Ok(self.albums.values().cloned().collect())
    }

    fn scan_by_year(&self, release_year: &str) -> Result<Vec<AlbumRecord>, StorageError> {
        Ok(self
            .albums
            .values()
            .filter(|album| album.release_year.matches(release_year))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(title: &str, year: &str) -> AlbumRecord {
        AlbumRecord::new(
            title,
            year,
            "Pop",
            vec!["Track 1".into()],
            format!("https://covers.example.com/{}.jpg", title.to_lowercase()),
        )
    }

    #[test]
    fn get_is_exact_match() {
        let store = InMemoryStore::from_records(vec![album("Lemonade", "2016")]);
        assert!(store.get("Lemonade").unwrap().is_some());
        assert!(store.get("lemonade").unwrap().is_none());
        assert!(store.get("Renaissance").unwrap().is_none());
    }

    #[test]
    fn scan_keeps_arrival_order() {
        let store = InMemoryStore::from_records(vec![
            album("Renaissance", "2022"),
            album("Dangerously in love", "2003"),
            album("Lemonade", "2016"),
        ]);
        let titles: Vec<String> = store.scan().unwrap().into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["Renaissance", "Dangerously in love", "Lemonade"]);
    }

    #[test]
    fn replace_keeps_position() {
        let mut store = InMemoryStore::from_records(vec![album("B'day", "2006"), album("4", "2011")]);
        store.insert(album("B'day", "2007"));
        assert_eq!(store.len(), 2);
        let first = &store.scan().unwrap()[0];
        assert_eq!(first.title, "B'day");
        assert!(first.release_year.matches("2007"));
    }

    #[test]
    fn scan_by_year_filters_on_text() {
        let mut numeric = album("4", "2011");
        numeric.release_year = 2011.into();
        let store = InMemoryStore::from_records(vec![
            album("I am... sasha fierce", "2008"),
            numeric,
            album("Beyoncé", "2013"),
        ]);
        let hits = store.scan_by_year("2011").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "4");
        assert!(store.scan_by_year("1999").unwrap().is_empty());
    }
}
