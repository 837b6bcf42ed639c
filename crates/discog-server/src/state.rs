//! Application state shared by all handlers.
//!
//! [`AppState`] carries the [`CatalogService`] and, through it, the injected
//! catalog store. Handlers only read, and the store is `Send + Sync`, so the
//! state is a plain `Arc` with no lock around it.

use std::sync::Arc;

use discog_core::AlbumRecord;
use discog_storage::{CatalogStore, InMemoryStore, SqliteStore};

use crate::error::ApiError;
use crate::service::CatalogService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared query service.
    pub service: Arc<CatalogService>,
}

impl AppState {
    /// Creates an `AppState` backed by the SQLite catalog at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::open(db_path)?;
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Creates an `AppState` over any catalog store.
    pub fn with_store(store: Arc<dyn CatalogStore>) -> Self {
        AppState {
            service: Arc::new(CatalogService::new(store)),
        }
    }

    /// Creates an `AppState` over an in-memory catalog (for testing).
    pub fn in_memory(records: Vec<AlbumRecord>) -> Self {
        Self::with_store(Arc::new(InMemoryStore::from_records(records)))
    }
}
