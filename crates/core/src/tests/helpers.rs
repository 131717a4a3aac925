// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, State, TransitionResult, apply};
use artsfest_domain::{Category, CompetitionName, DEFAULT_TIMEZONE, ResultKey, UploadStamp};
use time::OffsetDateTime;
use time::macros::datetime;

pub fn create_test_instant() -> OffsetDateTime {
    datetime!(2026-10-16 09:00:05 UTC)
}

pub fn create_test_stamp() -> UploadStamp {
    UploadStamp::new(create_test_instant(), DEFAULT_TIMEZONE)
}

pub fn create_test_key(category: Category, competition: &str) -> ResultKey {
    ResultKey::new(category, CompetitionName::new(competition).unwrap())
}

pub fn add(state: &State, category: Category, name: &str) -> State {
    let command: Command = Command::AddCompetition {
        category: Some(category),
        name: String::from(name),
    };
    apply(state, command, create_test_stamp()).unwrap().new_state
}

pub fn upload_at(
    state: &State,
    category: Category,
    competition: &str,
    link: &str,
    instant: OffsetDateTime,
) -> TransitionResult {
    let command: Command = Command::UploadResult {
        category: Some(category),
        competition: String::from(competition),
        pdf_link: String::from(link),
    };
    apply(state, command, UploadStamp::new(instant, DEFAULT_TIMEZONE)).unwrap()
}
