// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{DomainError, Selection};
use url::Url;

/// Validates a PDF link entered by the operator.
///
/// The link is trimmed and must then parse as an absolute URL. Reachability
/// and content type are not checked.
///
/// # Arguments
///
/// * `raw` - The link as entered
///
/// # Returns
///
/// * `Ok(String)` containing the trimmed link
///
/// # Errors
///
/// Returns an error if:
/// - The link is empty or whitespace-only
/// - The trimmed link is not an absolute URL
pub fn validate_pdf_link(raw: &str) -> Result<String, DomainError> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::MissingSelection(Selection::PdfLink));
    }

    Url::parse(trimmed).map_err(|e| DomainError::InvalidPdfLink {
        link: raw.to_string(),
        reason: e.to_string(),
    })?;

    Ok(trimmed.to_string())
}

/// Parses an IANA time zone name such as `Asia/Kolkata`.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is unknown.
pub fn parse_timezone(name: &str) -> Result<chrono_tz::Tz, DomainError> {
    name.parse()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}
