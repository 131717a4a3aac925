// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session coordinator for the arts-festival results console.
//!
//! A [`Console`] owns the in-memory competition catalog and result set for
//! one operator session. Every mutation is applied locally first, then the
//! full document is written to the [`DocumentStore`] in a background task
//! while a [`SaveStatus`] reports progress.
//!
//! ## Save Status
//!
//! ```text
//! idle --commit--> saving --ok--> saved --(saved_display)--> idle
//!                  saving --fail--> error   (sticky until the next commit)
//! ```
//!
//! A failed write never rolls back the in-memory state.
//!
//! [`DocumentStore`]: artsfest_persistence::DocumentStore

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
#![allow(clippy::multiple_crate_versions)]

mod config;
mod console;
mod error;
mod feedback;
mod operations;
mod pending;
mod status;

#[cfg(test)]
mod tests;

pub use config::{Clock, ConsoleConfig, DEFAULT_SAVED_DISPLAY, SystemClock};
pub use console::{Console, LoadOutcome, LoadReport};
pub use error::ConsoleError;
pub use feedback::{Notice, OperatorFeedback, Prompt, SilentFeedback};
pub use operations::Outcome;
pub use pending::PendingWrite;
pub use status::SaveStatus;
