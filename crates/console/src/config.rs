// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use artsfest_domain::{DEFAULT_TIMEZONE, Tz};
use std::time::Duration;
use time::OffsetDateTime;

/// How long `Saved` is shown before the status returns to `Idle`.
pub const DEFAULT_SAVED_DISPLAY: Duration = Duration::from_secs(2);

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Delay between a successful write and the return to `Idle`.
    pub saved_display: Duration,
    /// Time zone used for the display form of upload instants.
    pub timezone: Tz,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            saved_display: DEFAULT_SAVED_DISPLAY,
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

/// Source of upload instants.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> OffsetDateTime;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
