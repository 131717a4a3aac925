// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use artsfest_domain::{CompetitionCatalog, ResultSet};

/// The complete curated state of one operator session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// Competitions grouped by category.
    pub catalog: CompetitionCatalog,
    /// Result records keyed by (category, competition).
    pub results: ResultSet,
}

impl State {
    /// Creates an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            catalog: CompetitionCatalog::new(),
            results: ResultSet::new(),
        }
    }
}

/// Which persisted document a transition changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The competition catalog changed.
    Catalog,
    /// The result set changed.
    Results,
    /// Nothing changed; no write is needed.
    None,
}

/// The result of a state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The document that must be persisted.
    pub change: Change,
}

impl TransitionResult {
    /// A transition that leaves `state` as it is.
    #[must_use]
    pub fn unchanged(state: &State) -> Self {
        Self {
            new_state: state.clone(),
            change: Change::None,
        }
    }
}
