//! Catalog Store abstraction for discog album records.
//!
//! Provides the [`CatalogStore`] trait defining the read contract the query
//! handlers depend on, plus two backends:
//!
//! - [`InMemoryStore`]: insertion-ordered map, for tests and ephemeral use
//! - [`SqliteStore`]: persistent SQLite file with embedded migrations
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`traits`]: CatalogStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: migration setup and connection configuration
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::CatalogStore;
