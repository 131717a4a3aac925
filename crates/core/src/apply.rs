// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Change, State, TransitionResult};
use artsfest_domain::{
    Category, CompetitionCatalog, CompetitionName, DomainError, ResultKey, ResultRecord,
    ResultSet, Selection, UploadStamp, validate_pdf_link,
};

/// Applies a command to the current state, producing the next state.
///
/// This function is pure: it never performs I/O. Deletes that target
/// nothing produce `Change::None` rather than an error.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `stamp` - The upload instant, used only by `UploadResult`
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and the changed document
/// * `Err(CoreError)` if the command input is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A competition name is empty after trimming
/// - A required category, competition, or PDF link is missing
/// - The PDF link is not an absolute URL
pub fn apply(
    state: &State,
    command: Command,
    stamp: UploadStamp,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::AddCompetition { category, name } => {
            let name: CompetitionName = CompetitionName::new(&name)?;
            let category: Category = require_category(category)?;

            let catalog: CompetitionCatalog = state.catalog.with_appended(category, name);

            Ok(TransitionResult {
                new_state: State {
                    catalog,
                    results: state.results.clone(),
                },
                change: Change::Catalog,
            })
        }
        Command::DeleteCompetition { category, index } => {
            let Some(catalog) = state.catalog.without_index(category, index) else {
                return Ok(TransitionResult::unchanged(state));
            };

            // Result records of the removed competition are kept.
            Ok(TransitionResult {
                new_state: State {
                    catalog,
                    results: state.results.clone(),
                },
                change: Change::Catalog,
            })
        }
        Command::UploadResult {
            category,
            competition,
            pdf_link,
        } => {
            let category: Category = require_category(category)?;
            let competition: CompetitionName = CompetitionName::new(&competition)
                .map_err(|_| DomainError::MissingSelection(Selection::Competition))?;
            let pdf_link: String = validate_pdf_link(&pdf_link)?;

            let key: ResultKey = ResultKey::new(category, competition);

            // A re-upload must sort after the record it replaces.
            let stamp: UploadStamp = match state.results.get(&key) {
                Some(previous) => stamp.after(previous.uploaded_at),
                None => stamp,
            };
            let record: ResultRecord = stamp.into_record(pdf_link);

            let results: ResultSet = state.results.with_record(key, record);

            Ok(TransitionResult {
                new_state: State {
                    catalog: state.catalog.clone(),
                    results,
                },
                change: Change::Results,
            })
        }
        Command::DeleteResult { key } => {
            let Some(results) = state.results.without(&key) else {
                return Ok(TransitionResult::unchanged(state));
            };

            Ok(TransitionResult {
                new_state: State {
                    catalog: state.catalog.clone(),
                    results,
                },
                change: Change::Results,
            })
        }
    }
}

fn require_category(category: Option<Category>) -> Result<Category, DomainError> {
    category.ok_or(DomainError::MissingSelection(Selection::Category))
}
