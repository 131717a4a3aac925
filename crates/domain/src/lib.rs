// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod error;
mod stamp;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{CompetitionCatalog, ResultSet};
pub use error::{DomainError, Selection};
pub use stamp::{DEFAULT_TIMEZONE, UploadStamp, format_uploaded_date};
pub use types::{Category, CompetitionName, RESULT_KEY_SEPARATOR, ResultKey, ResultRecord};
pub use validation::{parse_timezone, validate_pdf_link};

// Re-export so downstream crates name the same time zone type.
pub use chrono_tz::Tz;
