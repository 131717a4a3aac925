// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The operator-facing feedback channel.

use crate::status::SaveStatus;
use artsfest_domain::{Category, CompetitionName, DomainError, ResultKey};
use artsfest_persistence::DocumentKey;

/// A message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A competition was appended to a category.
    CompetitionAdded {
        /// The category.
        category: Category,
        /// The trimmed competition name.
        name: CompetitionName,
    },
    /// A result link was stored.
    ResultUploaded {
        /// The result that was stored.
        key: ResultKey,
    },
    /// A result record was removed.
    ResultDeleted {
        /// The result that was removed.
        key: ResultKey,
    },
    /// Operator input was rejected; nothing changed.
    ValidationFailed(DomainError),
    /// A write did not reach the store. The in-memory state is kept.
    SaveFailed {
        /// The document that failed to save.
        document: DocumentKey,
        /// The store's reason.
        reason: String,
    },
    /// A document could not be loaded and starts empty.
    LoadFailed {
        /// The document that failed to load.
        document: DocumentKey,
        /// The store's reason.
        reason: String,
    },
}

impl Notice {
    /// Returns a stable name for the notice kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CompetitionAdded { .. } => "competition_added",
            Self::ResultUploaded { .. } => "result_uploaded",
            Self::ResultDeleted { .. } => "result_deleted",
            Self::ValidationFailed(_) => "validation_failed",
            Self::SaveFailed { .. } => "save_failed",
            Self::LoadFailed { .. } => "load_failed",
        }
    }

    /// Whether the operator must acknowledge this notice.
    #[must_use]
    pub const fn requires_acknowledgment(&self) -> bool {
        matches!(
            self,
            Self::ValidationFailed(_) | Self::SaveFailed { .. } | Self::LoadFailed { .. }
        )
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CompetitionAdded { category, name } => {
                write!(f, "Competition '{name}' added to {category}")
            }
            Self::ResultUploaded { key } => write!(f, "Result uploaded for {key}"),
            Self::ResultDeleted { key } => write!(f, "Result deleted for {key}"),
            Self::ValidationFailed(err) => write!(f, "{err}"),
            Self::SaveFailed { document, reason } => {
                write!(f, "Failed to save {document}: {reason}")
            }
            Self::LoadFailed { document, reason } => {
                write!(f, "Failed to load {document}: {reason}")
            }
        }
    }
}

/// A confirmation the operator must give before a destructive operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Confirm removing a competition from a category.
    DeleteCompetition {
        /// The category.
        category: Category,
        /// Position within the category.
        index: usize,
        /// The competition at that position.
        name: CompetitionName,
    },
    /// Confirm removing a result record.
    DeleteResult {
        /// The result to remove.
        key: ResultKey,
    },
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeleteCompetition { category, name, .. } => {
                write!(f, "Delete competition '{name}' from {category}?")
            }
            Self::DeleteResult { key } => write!(f, "Delete the result for {key}?"),
        }
    }
}

/// Receives operator feedback from a [`Console`](crate::Console).
///
/// `notify` may be called from background write tasks.
pub trait OperatorFeedback: Send + Sync {
    /// Delivers a notice.
    fn notify(&self, notice: Notice);

    /// Called on every save status transition, in transition order.
    ///
    /// Runs while the status is locked; implementations must not call back
    /// into the console.
    fn status_changed(&self, _status: SaveStatus) {}
}

/// Feedback sink that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentFeedback;

impl OperatorFeedback for SilentFeedback {
    fn notify(&self, notice: Notice) {
        tracing::debug!(kind = notice.kind(), %notice, "Notice dropped");
    }
}
