// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;
mod round_trip_tests;

use artsfest_domain::{
    Category, CompetitionCatalog, CompetitionName, DEFAULT_TIMEZONE, ResultKey, ResultSet,
    UploadStamp,
};
use time::macros::datetime;

pub fn create_test_catalog() -> CompetitionCatalog {
    CompetitionCatalog::new()
        .with_appended(Category::LowerPrimary, CompetitionName::new("Song").unwrap())
        .with_appended(
            Category::LowerPrimary,
            CompetitionName::new("Recitation").unwrap(),
        )
        .with_appended(Category::HighSchool, CompetitionName::new("Debate").unwrap())
}

pub fn create_test_results() -> ResultSet {
    let stamp: UploadStamp = UploadStamp::new(datetime!(2026-10-16 09:00:05 UTC), DEFAULT_TIMEZONE);
    ResultSet::new().with_record(
        ResultKey::new(Category::LowerPrimary, CompetitionName::new("Song").unwrap()),
        stamp.into_record(String::from("https://example.com/a.pdf")),
    )
}
