//! SQLite implementation of [`CatalogStore`].
//!
//! [`SqliteStore`] keeps each album as a JSON TEXT column alongside the
//! `title` key and `release_year` filter columns. The store holds a path,
//! not a connection: every call opens its own connection, so one handle is
//! `Send + Sync` and can serve concurrent requests without a lock.

use std::collections::HashSet;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use discog_core::AlbumRecord;

use crate::error::StorageError;
use crate::traits::CatalogStore;

/// SQLite-backed implementation of [`CatalogStore`].
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: String,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`, applying migrations.
    pub fn open(path: &str) -> Result<Self, StorageError> {
        // Creating the schema once up front; later calls only read.
        let _conn = crate::schema::open_database(path)?;
        Ok(SqliteStore {
            path: path.to_string(),
        })
    }

    /// Opens a fresh database in a unique temp file (for testing).
    pub fn temporary() -> Result<Self, StorageError> {
        let temp_path = std::env::temp_dir()
            .join(format!("discog_{}.db", Uuid::new_v4()))
            .to_string_lossy()
            .to_string();
        Self::open(&temp_path)
    }

    /// The database file path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Inserts or replaces one album after validating it.
    ///
    /// Replacing an album keeps its arrival position.
    pub fn put_album(&self, record: &AlbumRecord) -> Result<(), StorageError> {
        record.validate()?;
        let conn = self.open_conn()?;
        upsert(&conn, record)
    }

    /// Validates and writes all `records` in one transaction.
    ///
    /// Nothing is written if any record is invalid. A title repeated within
    /// `records` is written once, last record wins. Returns the number of
    /// distinct titles written.
    pub fn import_albums(&self, records: &[AlbumRecord]) -> Result<usize, StorageError> {
        for record in records {
            record.validate()?;
        }
        let mut conn = self.open_conn()?;
        let tx = conn.transaction()?;
        let mut titles = HashSet::new();
        for record in records {
            upsert(&tx, record)?;
            titles.insert(record.title.as_str());
        }
        tx.commit()?;
        Ok(titles.len())
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn open_conn(&self) -> Result<Connection, StorageError> {
        if !Path::new(&self.path).exists() {
            return Err(StorageError::Unavailable(format!(
                "catalog database '{}' does not exist",
                self.path
            )));
        }
        Ok(Connection::open(&self.path)?)
    }

    /// Runs `sql` with one bound parameter set and decodes each `item` row.
    fn query_items<P: rusqlite::Params>(
        &self,
        sql: &str,
        params: P,
    ) -> Result<Vec<AlbumRecord>, StorageError> {
        let conn = self.open_conn()?;
        let mut stmt = conn.prepare(sql)?;
        let items = stmt
            .query_map(params, |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        items
            .iter()
            .map(|item| serde_json::from_str(item).map_err(StorageError::from))
            .collect()
    }
}

/// Writes one record, keeping the rowid of an existing row with the same title.
fn upsert(conn: &Connection, record: &AlbumRecord) -> Result<(), StorageError> {
    let item = serde_json::to_string(record)?;
    conn.execute(
        "INSERT INTO albums (title, release_year, item) VALUES (?1, ?2, ?3)
         ON CONFLICT(title) DO UPDATE SET
             release_year = excluded.release_year,
             item = excluded.item",
        params![record.title, record.release_year.as_text(), item],
    )?;
    Ok(())
}

impl CatalogStore for SqliteStore {
    fn get(&self, title: &str) -> Result<Option<AlbumRecord>, StorageError> {
        let conn = self.open_conn()?;
        let item: Option<String> = conn
            .query_row(
                "SELECT item FROM albums WHERE title = ?1",
                params![title],
                |row| row.get(0),
            )
            .optional()?;
        match item {
            Some(item) => Ok(Some(serde_json::from_str(&item)?)),
            None => Ok(None),
        }
    }

    fn scan(&self) -> Result<Vec<AlbumRecord>, StorageError> {
        self.query_items("SELECT item FROM albums ORDER BY rowid", params![])
    }

    fn scan_by_year(&self, release_year: &str) -> Result<Vec<AlbumRecord>, StorageError> {
        self.query_items(
            "SELECT item FROM albums WHERE release_year = ?1 ORDER BY rowid",
            params![release_year],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use discog_core::{CoreError, ReleaseYear};

    fn album(title: &str, year: &str) -> AlbumRecord {
        AlbumRecord::new(
            title,
            year,
            "R&B",
            vec!["Intro".into(), "Outro".into()],
            format!("https://covers.example.com/albumcover/{}.jpg", title.len()),
        )
    }

    fn seeded() -> SqliteStore {
        let store = SqliteStore::temporary().unwrap();
        store
            .import_albums(&[
                album("Lemonade", "2016"),
                album("Dangerously in love", "2003"),
                album("I am... sasha fierce", "2008"),
            ])
            .unwrap();
        store
    }

    #[test]
    fn get_hit_and_miss() {
        let store = seeded();
        let hit = store.get("Lemonade").unwrap().unwrap();
        assert_eq!(hit.genre, "R&B");
        assert_eq!(hit.tracklist, vec!["Intro", "Outro"]);
        assert!(store.get("lemonade").unwrap().is_none());
    }

    #[test]
    fn scan_returns_arrival_order() {
        let store = seeded();
        let titles: Vec<String> = store.scan().unwrap().into_iter().map(|a| a.title).collect();
        assert_eq!(
            titles,
            vec!["Lemonade", "Dangerously in love", "I am... sasha fierce"]
        );
    }

    #[test]
    fn upsert_keeps_arrival_position() {
        let store = seeded();
        store.put_album(&album("Lemonade", "2017")).unwrap();
        let all = store.scan().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].title, "Lemonade");
        assert!(all[0].release_year.matches("2017"));
    }

    #[test]
    fn scan_by_year_matches_numeric_and_text_years() {
        let store = seeded();
        let mut numeric = album("4", "0");
        numeric.release_year = ReleaseYear::Number(2008);
        store.put_album(&numeric).unwrap();

        let titles: Vec<String> = store
            .scan_by_year("2008")
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["I am... sasha fierce", "4"]);
        assert!(store.scan_by_year("2009").unwrap().is_empty());
    }

    #[test]
    fn extra_attributes_are_persisted() {
        let store = SqliteStore::temporary().unwrap();
        let mut record = album("Renaissance", "2022");
        record
            .attributes
            .insert("cover_etag".into(), serde_json::json!("9f1c"));
        store.put_album(&record).unwrap();

        let back = store.get("Renaissance").unwrap().unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn import_counts_distinct_titles() {
        let store = SqliteStore::temporary().unwrap();
        let written = store
            .import_albums(&[
                album("Lemonade", "2016"),
                album("Renaissance", "2022"),
                album("Lemonade", "2017"),
            ])
            .unwrap();
        assert_eq!(written, 2);

        let all = store.scan().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "Lemonade");
        assert!(all[0].release_year.matches("2017"));
    }

    #[test]
    fn invalid_import_writes_nothing() {
        let store = SqliteStore::temporary().unwrap();
        let mut bad = album("Cowboy carter", "2024");
        bad.album_url = "not a url".into();
        let err = store
            .import_albums(&[album("Renaissance", "2022"), bad])
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidRecord(_)));
        assert!(store.scan().unwrap().is_empty());

        let err = store
            .import_albums(&[album("Renaissance", "2022"), album("evolve", "2017")])
            .unwrap_err();
        assert!(matches!(
            err,
            StorageError::InvalidRecord(CoreError::UnnormalizedTitle { .. })
        ));
        assert!(store.scan().unwrap().is_empty());
    }

    #[test]
    fn corrupt_item_surfaces_as_serialization_error() {
        let store = SqliteStore::temporary().unwrap();
        let conn = Connection::open(store.path()).unwrap();
        conn.execute(
            "INSERT INTO albums (title, release_year, item) VALUES ('Broken', '2020', '{\"title\":\"Broken\"}')",
            [],
        )
        .unwrap();
        assert!(matches!(
            store.get("Broken"),
            Err(StorageError::Serialization(_))
        ));
        assert!(matches!(store.scan(), Err(StorageError::Serialization(_))));
    }

    #[test]
    fn missing_database_is_unavailable() {
        let store = SqliteStore::temporary().unwrap();
        std::fs::remove_file(store.path()).unwrap();
        assert!(matches!(store.scan(), Err(StorageError::Unavailable(_))));
    }
}
