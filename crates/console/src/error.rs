// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for console operations.

use artsfest::CoreError;
use artsfest_domain::DomainError;

/// Errors returned by mutation operations.
///
/// Every variant means the operation was rejected before any state change
/// or write. Persistence failures are not errors here; they are reported
/// through the save status and the operator feedback channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// The operator input failed validation.
    Validation(DomainError),
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "Validation failed: {err}"),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<DomainError> for ConsoleError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}

impl From<CoreError> for ConsoleError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DomainViolation(domain) => Self::Validation(domain),
        }
    }
}
