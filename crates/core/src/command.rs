// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use artsfest_domain::{Category, ResultKey};

/// A command represents operator intent as data only.
///
/// Fields carry raw operator input; `apply` validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a competition to a category.
    AddCompetition {
        /// The selected category, if any.
        category: Option<Category>,
        /// The competition name as entered.
        name: String,
    },
    /// Remove the competition at a position within a category.
    DeleteCompetition {
        /// The category to remove from.
        category: Category,
        /// Zero-based position within the category.
        index: usize,
    },
    /// Store a result link for a competition, replacing any earlier one.
    UploadResult {
        /// The selected category, if any.
        category: Option<Category>,
        /// The selected competition; empty when none is selected.
        competition: String,
        /// The PDF link as entered.
        pdf_link: String,
    },
    /// Remove the result record of a competition.
    DeleteResult {
        /// The record to remove.
        key: ResultKey,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddCompetition { .. } => "AddCompetition",
            Self::DeleteCompetition { .. } => "DeleteCompetition",
            Self::UploadResult { .. } => "UploadResult",
            Self::DeleteResult { .. } => "DeleteResult",
        }
    }
}
