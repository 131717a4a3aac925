// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// An operator selection that an operation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// No category was selected.
    Category,
    /// No competition was selected.
    Competition,
    /// No PDF link was entered.
    PdfLink,
}

impl Selection {
    /// Returns the human-readable name of the missing selection.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Competition => "competition",
            Self::PdfLink => "PDF link",
        }
    }
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Competition name is empty after trimming whitespace.
    EmptyCompetitionName,
    /// A required selection or input is missing.
    MissingSelection(Selection),
    /// The PDF link is not a well-formed absolute URL.
    InvalidPdfLink {
        /// The rejected link, as entered.
        link: String,
        /// Why the URL parser rejected it.
        reason: String,
    },
    /// Category label is not one of the fixed categories.
    UnknownCategory(String),
    /// A result key could not be split back into category and competition.
    InvalidResultKey(String),
    /// Time zone name is not a known IANA zone.
    InvalidTimezone(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCompetitionName => write!(f, "Competition name cannot be empty"),
            Self::MissingSelection(selection) => {
                write!(f, "A {} must be provided", selection.as_str())
            }
            Self::InvalidPdfLink { link, reason } => {
                write!(
                    f,
                    "Invalid PDF link '{link}': {reason} (expected an absolute URL such as https://...)"
                )
            }
            Self::UnknownCategory(label) => write!(f, "Unknown category: '{label}'"),
            Self::InvalidResultKey(key) => write!(f, "Invalid result key: '{key}'"),
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: '{tz}'"),
        }
    }
}

impl std::error::Error for DomainError {}
