// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the arts-festival results console.
//!
//! The console stores exactly two documents, the competition catalog and
//! the result set, each under a fixed key within one collection. This crate
//! defines that contract ([`DocumentStore`]) and provides a Diesel-backed
//! implementation ([`Persistence`]).
//!
//! ## Storage Model
//!
//! - One `documents` table keyed by `(collection, doc_key)`
//! - Bodies are JSON text; the store does not interpret them
//! - Every write replaces the whole row (`REPLACE INTO`)
//!
//! ## Testing Philosophy
//!
//! - Tests run against `SQLite` in-memory databases
//! - Each `new_in_memory()` call gets an isolated database

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use async_trait::async_trait;
use diesel::SqliteConnection;
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::Mutex;
use tracing::{debug, info};

mod backend;
mod data_models;
mod diesel_schema;
mod documents;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use documents::{decode_catalog, decode_results, encode_catalog, encode_results};
pub use error::PersistenceError;
pub use store::{DEFAULT_COLLECTION, DocumentKey, DocumentStore};

use data_models::{DocumentRow, NewDocument};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite`-backed document store.
///
/// The connection is guarded by an async mutex so the store can be shared
/// between the console and its background write tasks.
pub struct Persistence {
    conn: Mutex<SqliteConnection>,
    collection: String,
}

impl Persistence {
    /// Creates a new document store with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self::from_connection(conn))
    }

    /// Creates a new document store with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: SqliteConnection) -> Self {
        Self {
            conn: Mutex::new(conn),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    /// Stores documents under `collection` instead of the default.
    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// The collection documents are stored under.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Lists the document keys present in this store's collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_document_keys(&self) -> Result<Vec<String>, PersistenceError> {
        let mut conn = self.conn.lock().await;
        queries::list_document_keys(&mut conn, &self.collection)
    }
}

#[async_trait]
impl DocumentStore for Persistence {
    async fn read(&self, key: DocumentKey) -> Result<Option<Value>, PersistenceError> {
        let row: Option<DocumentRow> = {
            let mut conn = self.conn.lock().await;
            queries::read_document(&mut conn, &self.collection, key.as_str())?
        };

        let Some(row) = row else {
            debug!(collection = %self.collection, key = %key, "Document absent");
            return Ok(None);
        };

        debug!(
            collection = %row.collection,
            key = %row.doc_key,
            updated_at = %row.updated_at,
            "Document read"
        );
        Ok(Some(serde_json::from_str(&row.body)?))
    }

    async fn write(&self, key: DocumentKey, document: Value) -> Result<(), PersistenceError> {
        let body: String = serde_json::to_string(&document)?;
        let updated_at: String = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

        let new_document: NewDocument<'_> = NewDocument {
            collection: &self.collection,
            doc_key: key.as_str(),
            body: &body,
            updated_at: &updated_at,
        };

        {
            let mut conn = self.conn.lock().await;
            mutations::write_document(&mut conn, &new_document)?;
        }

        info!(
            collection = %self.collection,
            key = %key,
            bytes = body.len(),
            "Document written"
        );
        Ok(())
    }
}
