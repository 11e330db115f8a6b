//! Options for a slot parse.

use chrono::{Local, NaiveDate};

use crate::calendar::CalendarSystem;

/// Configuration for [`AmazonDate::parse_with`](crate::AmazonDate::parse_with).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use amazon_date::{CalendarSystem, ParseOptions};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2018, 6, 1).unwrap();
/// let options = ParseOptions::new()
///     .with_calendar(CalendarSystem::Gregorian)
///     .with_today(today);
///
/// assert_eq!(options.today(), today);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Calendar used to move through weeks of the year.
    calendar: CalendarSystem,
    /// Reference date for decade slots. `None` reads the local system date.
    today:    Option<NaiveDate>,
}

impl ParseOptions {
    /// Creates options with the invariant calendar and the system date.
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_calendar(mut self, calendar: CalendarSystem) -> Self {
        self.calendar = calendar;
        self
    }

    /// Same as [`with_calendar`](Self::with_calendar), driven by the
    /// `use_gregorian_calendar` flag.
    pub const fn with_gregorian_calendar(self, use_gregorian_calendar: bool) -> Self {
        self.with_calendar(CalendarSystem::from_gregorian_flag(use_gregorian_calendar))
    }

    /// Pins the date decade slots are resolved against.
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub const fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    /// The pinned reference date, or today's local date.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
