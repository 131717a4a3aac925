// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Separator between category and competition in the wire form of a [`ResultKey`].
pub const RESULT_KEY_SEPARATOR: char = '-';

/// The fixed age/grade bracket a competition is grouped under.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Lower primary.
    #[serde(rename = "LP")]
    LowerPrimary,
    /// Upper primary.
    #[serde(rename = "UP")]
    UpperPrimary,
    /// High school.
    #[serde(rename = "High School")]
    HighSchool,
    /// Higher secondary.
    #[serde(rename = "Higher Secondary")]
    HigherSecondary,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [
        Self::LowerPrimary,
        Self::UpperPrimary,
        Self::HighSchool,
        Self::HigherSecondary,
    ];

    /// Returns the category label used on the wire and in result keys.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LowerPrimary => "LP",
            Self::UpperPrimary => "UP",
            Self::HighSchool => "High School",
            Self::HigherSecondary => "Higher Secondary",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The name of a competition within a category.
///
/// Always trimmed and non-empty. Names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetitionName(String);

impl CompetitionName {
    /// Creates a competition name from operator input.
    ///
    /// Surrounding whitespace is removed before validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCompetitionName` if nothing remains after trimming.
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed: &str = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCompetitionName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompetitionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies the single result record of one (category, competition) pair.
///
/// On the wire the key is `"<category>-<competition>"`. Parsing splits at the
/// first separator; no category label contains it, so competition names that
/// do contain it still round-trip.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResultKey {
    /// The category of the competition.
    pub category: Category,
    /// The competition within that category.
    pub competition: CompetitionName,
}

impl ResultKey {
    /// Creates a new result key.
    #[must_use]
    pub const fn new(category: Category, competition: CompetitionName) -> Self {
        Self {
            category,
            competition,
        }
    }
}

impl std::fmt::Display for ResultKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{RESULT_KEY_SEPARATOR}{}",
            self.category.as_str(),
            self.competition.value()
        )
    }
}

impl FromStr for ResultKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, competition) = s
            .split_once(RESULT_KEY_SEPARATOR)
            .ok_or_else(|| DomainError::InvalidResultKey(s.to_string()))?;
        let category: Category = category.parse()?;
        // Stored keys are written from trimmed names; anything else is not a key.
        if competition.trim() != competition {
            return Err(DomainError::InvalidResultKey(s.to_string()));
        }
        let competition: CompetitionName = CompetitionName::new(competition)
            .map_err(|_| DomainError::InvalidResultKey(s.to_string()))?;
        Ok(Self::new(category, competition))
    }
}

impl TryFrom<String> for ResultKey {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResultKey> for String {
    fn from(key: ResultKey) -> Self {
        key.to_string()
    }
}

/// A link to the results document of one competition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    /// Absolute URL of the results PDF.
    pub pdf_link: String,
    /// When the link was uploaded.
    #[serde(with = "time::serde::rfc3339")]
    pub uploaded_at: time::OffsetDateTime,
    /// Wall-clock display form of `uploaded_at` in the festival's time zone.
    pub uploaded_date: String,
}
