// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The competition catalog and the result set.
//!
//! Both are passive values. Every "mutation" returns a new value so callers
//! can apply it optimistically and persist the full snapshot.

use crate::types::{Category, CompetitionName, ResultKey, ResultRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Competitions grouped by category, in insertion order within each category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetitionCatalog {
    entries: BTreeMap<Category, Vec<CompetitionName>>,
}

impl CompetitionCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the competitions of a category in display order.
    ///
    /// A category with no entry yields an empty slice.
    #[must_use]
    pub fn competitions(&self, category: Category) -> &[CompetitionName] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns whether the category has an entry, even an empty one.
    #[must_use]
    pub fn has_category(&self, category: Category) -> bool {
        self.entries.contains_key(&category)
    }

    /// Iterates over categories that have an entry.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[CompetitionName])> {
        self.entries
            .iter()
            .map(|(category, names)| (*category, names.as_slice()))
    }

    /// Total number of competitions across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Returns whether there are no competitions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy with `name` appended to the end of `category`.
    #[must_use]
    pub fn with_appended(&self, category: Category, name: CompetitionName) -> Self {
        let mut next: Self = self.clone();
        next.entries.entry(category).or_default().push(name);
        next
    }

    /// Returns a copy with the competition at `index` removed from `category`.
    ///
    /// The category entry is kept even when it becomes empty.
    /// Returns `None` if the category has no entry or `index` is out of range.
    #[must_use]
    pub fn without_index(&self, category: Category, index: usize) -> Option<Self> {
        if index >= self.entries.get(&category)?.len() {
            return None;
        }
        let mut next: Self = self.clone();
        if let Some(names) = next.entries.get_mut(&category) {
            names.remove(index);
        }
        Some(next)
    }
}

/// At most one result record per (category, competition) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: BTreeMap<ResultKey, ResultRecord>,
}

impl ResultSet {
    /// Creates an empty result set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Looks up the record for a key.
    #[must_use]
    pub fn get(&self, key: &ResultKey) -> Option<&ResultRecord> {
        self.records.get(key)
    }

    /// Returns whether a record exists for the key.
    #[must_use]
    pub fn contains(&self, key: &ResultKey) -> bool {
        self.records.contains_key(key)
    }

    /// Iterates over records in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ResultKey, &ResultRecord)> {
        self.records.iter()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns a copy with `record` stored at `key`, replacing any previous record.
    #[must_use]
    pub fn with_record(&self, key: ResultKey, record: ResultRecord) -> Self {
        let mut next: Self = self.clone();
        next.records.insert(key, record);
        next
    }

    /// Returns a copy without the record at `key`, or `None` if there is none.
    #[must_use]
    pub fn without(&self, key: &ResultKey) -> Option<Self> {
        if !self.records.contains_key(key) {
            return None;
        }
        let mut next: Self = self.clone();
        next.records.remove(key);
        Some(next)
    }
}
