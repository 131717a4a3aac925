// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The persistence coordinator.

use crate::config::{Clock, ConsoleConfig, SystemClock};
use crate::feedback::{Notice, OperatorFeedback};
use crate::pending::PendingWrite;
use crate::status::{SaveStatus, StatusTracker};
use artsfest::State;
use artsfest_domain::{CompetitionCatalog, ResultSet};
use artsfest_persistence::{
    DocumentKey, DocumentStore, PersistenceError, decode_catalog, decode_results, encode_catalog,
    encode_results,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// How one document fared during [`Console::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The stored document was loaded.
    Loaded,
    /// No document was stored; the entity starts empty.
    Absent,
    /// The document could not be read or decoded; the entity starts empty.
    Failed(String),
}

/// Per-document result of [`Console::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// The competition catalog.
    pub competitions: LoadOutcome,
    /// The result set.
    pub results: LoadOutcome,
}

/// One operator session over a [`DocumentStore`].
///
/// The console is the single owner of the catalog and result set. Mutations
/// take `&mut self` and apply in call order; writes run as background tasks
/// and may complete out of order, in which case the last write to reach the
/// store wins.
///
/// Committing requires a Tokio runtime.
pub struct Console<S> {
    store: Arc<S>,
    feedback: Arc<dyn OperatorFeedback>,
    config: ConsoleConfig,
    clock: Arc<dyn Clock>,
    state: State,
    tracker: Arc<StatusTracker>,
}

impl<S> Console<S>
where
    S: DocumentStore + 'static,
{
    /// Starts a session with empty entities and `Idle` status.
    ///
    /// Call [`load`](Self::load) to read the stored documents.
    #[must_use]
    pub fn new(store: Arc<S>, feedback: Arc<dyn OperatorFeedback>, config: ConsoleConfig) -> Self {
        Self {
            store,
            tracker: Arc::new(StatusTracker::new(Arc::clone(&feedback))),
            feedback,
            config,
            clock: Arc::new(SystemClock),
            state: State::new(),
        }
    }

    /// Replaces the clock used to stamp uploads.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Reads both documents from the store.
    ///
    /// Load failures are never fatal: the affected entity starts empty and
    /// the operator is notified. There is no automatic retry.
    pub async fn load(&mut self) -> LoadReport {
        let (catalog, competitions): (CompetitionCatalog, LoadOutcome) = self
            .load_document(DocumentKey::Competitions, decode_catalog)
            .await;
        let (results, results_outcome): (ResultSet, LoadOutcome) =
            self.load_document(DocumentKey::Results, decode_results).await;

        self.state = State { catalog, results };

        info!(
            competitions = self.state.catalog.len(),
            results = self.state.results.len(),
            "Session loaded"
        );

        LoadReport {
            competitions,
            results: results_outcome,
        }
    }

    async fn load_document<T: Default>(
        &self,
        key: DocumentKey,
        decode: fn(Value) -> Result<T, PersistenceError>,
    ) -> (T, LoadOutcome) {
        let loaded: Result<Option<T>, PersistenceError> = self
            .store
            .read(key)
            .await
            .and_then(|document| document.map(decode).transpose());

        match loaded {
            Ok(Some(value)) => {
                debug!(document = %key, "Document loaded");
                (value, LoadOutcome::Loaded)
            }
            Ok(None) => {
                debug!(document = %key, "Document absent, starting empty");
                (T::default(), LoadOutcome::Absent)
            }
            Err(err) => {
                error!(document = %key, error = %err, "Failed to load document");
                self.feedback.notify(Notice::LoadFailed {
                    document: key,
                    reason: err.to_string(),
                });
                (T::default(), LoadOutcome::Failed(err.to_string()))
            }
        }
    }

    /// Replaces the catalog and writes it to the store in the background.
    pub fn commit_catalog(&mut self, catalog: CompetitionCatalog) -> PendingWrite {
        self.state.catalog = catalog;
        let document: Result<Value, PersistenceError> = encode_catalog(&self.state.catalog);
        self.persist(DocumentKey::Competitions, document)
    }

    /// Replaces the result set and writes it to the store in the background.
    pub fn commit_results(&mut self, results: ResultSet) -> PendingWrite {
        self.state.results = results;
        let document: Result<Value, PersistenceError> = encode_results(&self.state.results);
        self.persist(DocumentKey::Results, document)
    }

    fn persist(
        &self,
        key: DocumentKey,
        document: Result<Value, PersistenceError>,
    ) -> PendingWrite {
        let epoch: u64 = self.tracker.begin();
        let store: Arc<S> = Arc::clone(&self.store);
        let tracker: Arc<StatusTracker> = Arc::clone(&self.tracker);
        let feedback: Arc<dyn OperatorFeedback> = Arc::clone(&self.feedback);
        let saved_display: Duration = self.config.saved_display;

        debug!(document = %key, epoch, "Dispatching write");

        let handle = tokio::spawn(async move {
            let result: Result<(), PersistenceError> = match document {
                Ok(document) => store.write(key, document).await,
                Err(err) => Err(err),
            };

            match &result {
                Ok(()) => {
                    info!(document = %key, epoch, "Write succeeded");
                    if tracker.succeeded(epoch) {
                        tokio::spawn(async move {
                            tokio::time::sleep(saved_display).await;
                            tracker.expire(epoch);
                        });
                    }
                }
                Err(err) => {
                    warn!(document = %key, epoch, error = %err, "Write failed");
                    tracker.failed(epoch);
                    feedback.notify(Notice::SaveFailed {
                        document: key,
                        reason: err.to_string(),
                    });
                }
            }

            result
        });

        PendingWrite::new(key, epoch, handle)
    }

    /// The current catalog.
    #[must_use]
    pub const fn catalog(&self) -> &CompetitionCatalog {
        &self.state.catalog
    }

    /// The current result set.
    #[must_use]
    pub const fn results(&self) -> &ResultSet {
        &self.state.results
    }

    /// The current catalog and result set.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// The current save status.
    #[must_use]
    pub fn status(&self) -> SaveStatus {
        self.tracker.status()
    }

    /// Subscribes to save status transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SaveStatus> {
        self.tracker.subscribe()
    }

    /// The session configuration.
    #[must_use]
    pub const fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub(crate) fn stamp_now(&self) -> time::OffsetDateTime {
        self.clock.now()
    }

    pub(crate) fn notify(&self, notice: Notice) {
        self.feedback.notify(notice);
    }
}
