//! Storage error types for discog-storage.
//!
//! [`StorageError`] covers the failure modes of the storage layer: database
//! access, record (de)serialization, schema migration, and records rejected
//! on write.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying SQLite call failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// JSON serialization or deserialization of a stored record failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// The catalog cannot be reached.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// A record failed validation and was not written.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] discog_core::CoreError),
}
