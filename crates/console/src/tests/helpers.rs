// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Clock, Console, ConsoleConfig, Notice, OperatorFeedback, SaveStatus};
use artsfest_persistence::{DocumentKey, DocumentStore, PersistenceError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use time::{Duration, OffsetDateTime};
use time::macros::datetime;
use tokio::sync::Semaphore;

/// In-memory store that records every call.
#[derive(Default)]
pub struct RecordingStore {
    documents: Mutex<HashMap<DocumentKey, Value>>,
    writes: Mutex<Vec<(DocumentKey, Value)>>,
    reads: Mutex<Vec<DocumentKey>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    gate: Option<Semaphore>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes each wait for a permit from `release`.
    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    pub fn with_document(self, key: DocumentKey, document: Value) -> Self {
        self.documents.lock().unwrap().insert(key, document);
        self
    }

    pub fn release(&self, writes: usize) {
        self.gate
            .as_ref()
            .expect("store is not gated")
            .add_permits(writes);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn writes(&self) -> Vec<(DocumentKey, Value)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn reads(&self) -> Vec<DocumentKey> {
        self.reads.lock().unwrap().clone()
    }

    pub fn document(&self, key: DocumentKey) -> Option<Value> {
        self.documents.lock().unwrap().get(&key).cloned()
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn read(&self, key: DocumentKey) -> Result<Option<Value>, PersistenceError> {
        self.reads.lock().unwrap().push(key);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PersistenceError::Unavailable(String::from("read refused")));
        }
        Ok(self.documents.lock().unwrap().get(&key).cloned())
    }

    async fn write(&self, key: DocumentKey, document: Value) -> Result<(), PersistenceError> {
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        self.writes.lock().unwrap().push((key, document.clone()));
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Unavailable(String::from("write refused")));
        }
        self.documents.lock().unwrap().insert(key, document);
        Ok(())
    }
}

/// Feedback sink that records notices and status transitions.
#[derive(Default)]
pub struct RecordingFeedback {
    notices: Mutex<Vec<Notice>>,
    statuses: Mutex<Vec<SaveStatus>>,
}

impl RecordingFeedback {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<SaveStatus> {
        self.statuses.lock().unwrap().clone()
    }
}

impl OperatorFeedback for RecordingFeedback {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }

    fn status_changed(&self, status: SaveStatus) {
        self.statuses.lock().unwrap().push(status);
    }
}

/// Clock that returns the same instant until moved.
pub struct FixedClock {
    now: Mutex<OffsetDateTime>,
}

impl FixedClock {
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock().unwrap()
    }
}

pub fn create_test_instant() -> OffsetDateTime {
    datetime!(2026-10-16 09:00:05 UTC)
}

pub struct TestConsole {
    pub console: Console<RecordingStore>,
    pub store: Arc<RecordingStore>,
    pub feedback: Arc<RecordingFeedback>,
    pub clock: Arc<FixedClock>,
}

pub fn create_test_console_with(store: RecordingStore) -> TestConsole {
    let store: Arc<RecordingStore> = Arc::new(store);
    let feedback: Arc<RecordingFeedback> = Arc::new(RecordingFeedback::default());
    let clock: Arc<FixedClock> = Arc::new(FixedClock::new(create_test_instant()));
    let console: Console<RecordingStore> = Console::new(
        Arc::clone(&store),
        Arc::clone(&feedback) as Arc<dyn OperatorFeedback>,
        ConsoleConfig::default(),
    )
    .with_clock(Arc::clone(&clock) as Arc<dyn Clock>);

    TestConsole {
        console,
        store,
        feedback,
        clock,
    }
}

pub fn create_test_console() -> TestConsole {
    create_test_console_with(RecordingStore::new())
}

pub const fn confirm(_: &crate::Prompt) -> bool {
    true
}

pub const fn decline(_: &crate::Prompt) -> bool {
    false
}
