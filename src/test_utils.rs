//! Shared helpers for unit tests.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{ParseOptions, SeasonTable, midnight_utc};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must exist")
}

pub fn utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    midnight_utc(date(year, month, day))
}

/// Italian table: winter Dec 21 - Mar 20, then spring, summer, autumn.
pub fn italian_seasons() -> SeasonTable {
    SeasonTable::load("it").expect("embedded Italian seasons must load")
}

/// Options with the decade reference date pinned to `today`.
pub fn pinned_options(today: NaiveDate) -> ParseOptions {
    ParseOptions::new().with_today(today)
}
