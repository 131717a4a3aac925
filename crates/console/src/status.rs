// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::feedback::OperatorFeedback;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::debug;

/// Progress of the most recent write. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStatus {
    /// No write is in flight and no feedback is shown.
    #[default]
    Idle,
    /// A write is in flight.
    Saving,
    /// The latest write succeeded.
    Saved,
    /// A write failed. Sticky until the next commit.
    Error,
}

impl SaveStatus {
    /// Returns the status name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Saving => "saving",
            Self::Saved => "saved",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Drives the save status state machine.
///
/// Each commit opens a new epoch. Completions and timers carry the epoch
/// they belong to, so a superseded write cannot report `Saved` and a stale
/// timer cannot clear a newer status. The epoch is only read or bumped
/// inside the watch channel's write lock, and feedback is delivered under
/// that same lock so operators see transitions in the order they happened.
pub(crate) struct StatusTracker {
    tx: watch::Sender<SaveStatus>,
    epoch: AtomicU64,
    feedback: Arc<dyn OperatorFeedback>,
}

impl StatusTracker {
    pub(crate) fn new(feedback: Arc<dyn OperatorFeedback>) -> Self {
        let (tx, _rx) = watch::channel(SaveStatus::Idle);
        Self {
            tx,
            epoch: AtomicU64::new(0),
            feedback,
        }
    }

    pub(crate) fn status(&self) -> SaveStatus {
        *self.tx.borrow()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<SaveStatus> {
        self.tx.subscribe()
    }

    /// Starts a new write and returns its epoch.
    pub(crate) fn begin(&self) -> u64 {
        let mut epoch: u64 = 0;
        self.tx.send_if_modified(|status| {
            epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
            self.transition(status, SaveStatus::Saving, epoch)
        });
        epoch
    }

    /// Records a successful write. Returns whether it was the latest.
    pub(crate) fn succeeded(&self, epoch: u64) -> bool {
        self.move_if_current(epoch, SaveStatus::Saving, SaveStatus::Saved)
    }

    /// Records a failed write. A failure always surfaces.
    pub(crate) fn failed(&self, epoch: u64) {
        self.tx
            .send_if_modified(|status| self.transition(status, SaveStatus::Error, epoch));
    }

    /// Clears `Saved` once its display time is over.
    pub(crate) fn expire(&self, epoch: u64) {
        self.move_if_current(epoch, SaveStatus::Saved, SaveStatus::Idle);
    }

    fn move_if_current(&self, epoch: u64, from: SaveStatus, to: SaveStatus) -> bool {
        self.tx.send_if_modified(|status| {
            if self.epoch.load(Ordering::SeqCst) != epoch || *status != from {
                debug!(epoch, to = %to, "Superseded status transition skipped");
                return false;
            }
            self.transition(status, to, epoch)
        })
    }

    /// Applies a transition while the channel is locked.
    ///
    /// `status_changed` runs here, so it must not read the status back.
    fn transition(&self, status: &mut SaveStatus, to: SaveStatus, epoch: u64) -> bool {
        let from: SaveStatus = *status;
        if from == to {
            return false;
        }
        *status = to;
        debug!(from = %from, to = %to, epoch, "Save status changed");
        self.feedback.status_changed(to);
        true
    }
}
