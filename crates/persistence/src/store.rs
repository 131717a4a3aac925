// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The document store contract.

use crate::error::PersistenceError;
use async_trait::async_trait;
use serde_json::Value;

/// Collection every document lives under unless configured otherwise.
pub const DEFAULT_COLLECTION: &str = "kalolsavam";

/// The two documents the console persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKey {
    /// The competition catalog.
    Competitions,
    /// The result set.
    Results,
}

impl DocumentKey {
    /// Returns the key the document is stored under.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Competitions => "competitions",
            Self::Results => "results",
        }
    }
}

impl std::fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whole-document storage keyed by [`DocumentKey`] within one collection.
///
/// Every write replaces the entire document. The store does not enforce
/// any schema on the documents it holds.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads a document, returning `None` if it has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn read(&self, key: DocumentKey) -> Result<Option<Value>, PersistenceError>;

    /// Replaces a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the write does not reach the store.
    async fn write(&self, key: DocumentKey, document: Value) -> Result<(), PersistenceError>;
}
