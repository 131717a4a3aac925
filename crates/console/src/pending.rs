// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use artsfest_persistence::{DocumentKey, PersistenceError};
use tokio::task::JoinHandle;

/// A background write of one document.
///
/// Dropping a `PendingWrite` detaches the task; the write still completes
/// and still drives the save status.
#[derive(Debug)]
pub struct PendingWrite {
    document: DocumentKey,
    epoch: u64,
    handle: JoinHandle<Result<(), PersistenceError>>,
}

impl PendingWrite {
    pub(crate) const fn new(
        document: DocumentKey,
        epoch: u64,
        handle: JoinHandle<Result<(), PersistenceError>>,
    ) -> Self {
        Self {
            document,
            epoch,
            handle,
        }
    }

    /// The document being written.
    #[must_use]
    pub const fn document(&self) -> DocumentKey {
        self.document
    }

    /// The commit sequence number of this write, starting at 1.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.epoch
    }

    /// Whether the write has completed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancels the write if it has not completed.
    ///
    /// An aborted write leaves the save status where it was.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Waits for the write to complete.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the write failed, or
    /// `PersistenceError::Unavailable` if the task was aborted or panicked.
    pub async fn wait(self) -> Result<(), PersistenceError> {
        match self.handle.await {
            Ok(result) => result,
            Err(join_error) => Err(PersistenceError::Unavailable(format!(
                "write of {} did not complete: {join_error}",
                self.document
            ))),
        }
    }
}
