// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Upload timestamps.
//!
//! A result record carries the upload instant twice: as an RFC 3339 instant
//! for ordering, and as a wall-clock string in the festival's time zone for
//! display. The display format follows the Indian locale convention
//! (`16/10/2026, 2:30:05 pm`).

use crate::types::ResultRecord;
use chrono_tz::Tz;
use time::{Duration, OffsetDateTime, UtcOffset};

/// Default time zone for display strings.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

const DISPLAY_FORMAT: &str = "%-d/%-m/%Y, %-I:%M:%S %P";

/// The instant a result link was uploaded, in both stored forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadStamp {
    uploaded_at: OffsetDateTime,
    uploaded_date: String,
    timezone: Tz,
}

impl UploadStamp {
    /// Stamps `instant`, normalized to UTC with millisecond precision.
    #[must_use]
    pub fn new(instant: OffsetDateTime, timezone: Tz) -> Self {
        let utc: OffsetDateTime = instant.to_offset(UtcOffset::UTC);
        let uploaded_at: OffsetDateTime = utc.replace_millisecond(utc.millisecond()).unwrap_or(utc);
        Self {
            uploaded_at,
            uploaded_date: format_uploaded_date(uploaded_at, timezone),
            timezone,
        }
    }

    /// Returns a stamp strictly later than `previous`.
    ///
    /// If this stamp is not already later, it is moved to one millisecond
    /// past `previous`.
    #[must_use]
    pub fn after(self, previous: OffsetDateTime) -> Self {
        if self.uploaded_at > previous {
            return self;
        }
        Self::new(previous + Duration::milliseconds(1), self.timezone)
    }

    /// The upload instant.
    #[must_use]
    pub const fn uploaded_at(&self) -> OffsetDateTime {
        self.uploaded_at
    }

    /// The display string.
    #[must_use]
    pub fn uploaded_date(&self) -> &str {
        &self.uploaded_date
    }

    /// Builds the result record for `pdf_link` uploaded at this instant.
    #[must_use]
    pub fn into_record(self, pdf_link: String) -> ResultRecord {
        ResultRecord {
            pdf_link,
            uploaded_at: self.uploaded_at,
            uploaded_date: self.uploaded_date,
        }
    }
}

/// Formats an instant as wall-clock time in `timezone`.
#[must_use]
pub fn format_uploaded_date(instant: OffsetDateTime, timezone: Tz) -> String {
    // Convert time::OffsetDateTime to chrono::DateTime<Utc>
    chrono::DateTime::from_timestamp(instant.unix_timestamp(), instant.nanosecond()).map_or_else(
        || instant.to_string(),
        |utc| utc.with_timezone(&timezone).format(DISPLAY_FORMAT).to_string(),
    )
}
