// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operator mutations.
//!
//! Each operation validates its input, computes the next state with
//! [`artsfest::apply`], and hands the changed document to the coordinator.
//! Rejected input changes nothing and issues no write.

use crate::console::Console;
use crate::error::ConsoleError;
use crate::feedback::{Notice, Prompt};
use crate::pending::PendingWrite;
use artsfest::{Change, Command, TransitionResult, apply};
use artsfest_domain::{Category, CompetitionName, ResultKey, UploadStamp};
use artsfest_persistence::DocumentStore;
use tracing::{debug, info, warn};

/// What a mutation operation did.
#[derive(Debug)]
#[must_use]
pub enum Outcome {
    /// The state changed and a write was dispatched.
    Committed(PendingWrite),
    /// The operator declined the confirmation; nothing changed.
    Declined,
    /// The target did not exist; nothing changed.
    Unchanged,
}

impl Outcome {
    /// Returns the dispatched write, if any.
    #[must_use]
    pub fn into_pending(self) -> Option<PendingWrite> {
        match self {
            Self::Committed(pending) => Some(pending),
            Self::Declined | Self::Unchanged => None,
        }
    }

    /// Whether a write was dispatched.
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

impl<S> Console<S>
where
    S: DocumentStore + 'static,
{
    /// Appends a competition to a category.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Validation` if no category is selected or the
    /// name is empty after trimming.
    pub fn add_competition(
        &mut self,
        category: Option<Category>,
        name: &str,
    ) -> Result<Outcome, ConsoleError> {
        let outcome: Outcome = self.execute(Command::AddCompetition {
            category,
            name: name.to_string(),
        })?;

        if let (true, Some(category), Ok(name)) =
            (outcome.is_committed(), category, CompetitionName::new(name))
        {
            info!(category = %category, name = %name, "Competition added");
            self.notify(Notice::CompetitionAdded { category, name });
        }
        Ok(outcome)
    }

    /// Removes the competition at `index` within `category`.
    ///
    /// The operator is asked to confirm through `confirm`. An out-of-range
    /// index returns `Outcome::Unchanged` without asking. Result records of
    /// the removed competition are kept.
    ///
    /// # Errors
    ///
    /// This operation has no input to reject; the `Result` mirrors the
    /// other operations.
    pub fn delete_competition<F>(
        &mut self,
        category: Category,
        index: usize,
        confirm: F,
    ) -> Result<Outcome, ConsoleError>
    where
        F: FnOnce(&Prompt) -> bool,
    {
        let Some(name) = self.catalog().competitions(category).get(index).cloned() else {
            debug!(category = %category, index, "No competition at index");
            return Ok(Outcome::Unchanged);
        };

        let prompt: Prompt = Prompt::DeleteCompetition {
            category,
            index,
            name,
        };
        if !confirm(&prompt) {
            debug!(%prompt, "Operator declined");
            return Ok(Outcome::Declined);
        }

        let outcome: Outcome = self.execute(Command::DeleteCompetition { category, index })?;
        info!(category = %category, index, "Competition deleted");
        Ok(outcome)
    }

    /// Stores a result link for a competition, replacing any earlier one.
    ///
    /// The record is stamped with the current instant; a re-upload is always
    /// stamped strictly later than the record it replaces.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Validation` if a selection is missing or the
    /// link is not an absolute URL.
    pub fn upload_result(
        &mut self,
        category: Option<Category>,
        competition: &str,
        pdf_link: &str,
    ) -> Result<Outcome, ConsoleError> {
        let outcome: Outcome = self.execute(Command::UploadResult {
            category,
            competition: competition.to_string(),
            pdf_link: pdf_link.to_string(),
        })?;

        if let (true, Some(category), Ok(competition)) = (
            outcome.is_committed(),
            category,
            CompetitionName::new(competition),
        ) {
            let key: ResultKey = ResultKey::new(category, competition);
            info!(key = %key, "Result uploaded");
            self.notify(Notice::ResultUploaded { key });
        }
        Ok(outcome)
    }

    /// Removes the result record for `key`.
    ///
    /// The operator is asked to confirm through `confirm`. An absent key
    /// returns `Outcome::Unchanged` without asking.
    ///
    /// # Errors
    ///
    /// This operation has no input to reject; the `Result` mirrors the
    /// other operations.
    pub fn delete_result<F>(&mut self, key: &ResultKey, confirm: F) -> Result<Outcome, ConsoleError>
    where
        F: FnOnce(&Prompt) -> bool,
    {
        if !self.results().contains(key) {
            debug!(key = %key, "No result for key");
            return Ok(Outcome::Unchanged);
        }

        let prompt: Prompt = Prompt::DeleteResult { key: key.clone() };
        if !confirm(&prompt) {
            debug!(%prompt, "Operator declined");
            return Ok(Outcome::Declined);
        }

        let outcome: Outcome = self.execute(Command::DeleteResult { key: key.clone() })?;
        if outcome.is_committed() {
            info!(key = %key, "Result deleted");
            self.notify(Notice::ResultDeleted { key: key.clone() });
        }
        Ok(outcome)
    }

    fn execute(&mut self, command: Command) -> Result<Outcome, ConsoleError> {
        let name: &'static str = command.name();
        let stamp: UploadStamp = UploadStamp::new(self.stamp_now(), self.config().timezone);

        let transition: TransitionResult = match apply(self.state(), command, stamp) {
            Ok(transition) => transition,
            Err(err) => {
                let err: ConsoleError = ConsoleError::from(err);
                warn!(command = name, error = %err, "Command rejected");
                let ConsoleError::Validation(domain) = &err;
                self.notify(Notice::ValidationFailed(domain.clone()));
                return Err(err);
            }
        };

        let TransitionResult { new_state, change } = transition;
        let outcome: Outcome = match change {
            Change::Catalog => Outcome::Committed(self.commit_catalog(new_state.catalog)),
            Change::Results => Outcome::Committed(self.commit_results(new_state.results)),
            Change::None => Outcome::Unchanged,
        };

        debug!(command = name, change = ?change, "Command applied");
        Ok(outcome)
    }
}
