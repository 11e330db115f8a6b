//! Resolve Amazon-style date slot values into concrete date ranges.
//!
//! Voice-assistant date slots come in a handful of shapes: a year (`2018`),
//! a decade (`201X`), a month (`2018-10`, `2018-10-XX`), a week (`2018-W03`),
//! the weekend of a week (`2018-W03-WE`), a season (`2018-WI`) or a single
//! day (`2018-10-20`). [`AmazonDate::parse`] turns any of them into an
//! inclusive start/end pair at midnight UTC.
//!
//! ```
//! use amazon_date::{AmazonDate, SeasonTable};
//!
//! let seasons = SeasonTable::load("it").unwrap();
//! let week = AmazonDate::parse("2018-W03-WE", &seasons, false).unwrap();
//! assert_eq!(week.to_string(), "2018-01-20/2018-01-21");
//! ```

mod calendar;
mod config;
mod consts;
mod parser;
mod prelude;
mod range;
mod season;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{CalendarSystem, DateTimeExt, GregorianCalendar, InvariantCalendar, WeekCalendar, midnight_utc};
pub use config::ParseOptions;
pub use consts::*;
pub use range::AmazonDate;
pub use season::{Season, SeasonError, SeasonTable};
pub use types::{Month, MonthDay};

use crate::prelude::*;

/// Part of a slot value an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Segment {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "week number")]
    Week,
}

/// Error type for slot parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The value is missing, empty or whitespace only.
    #[error("Value cannot be null, empty or whitespace (parameter '{param}')")]
    EmptyInput { param: &'static str },

    /// A segment that must be an integer is not one.
    #[error("Invalid {segment}: {value}")]
    InvalidFormat { segment: Segment, value: String },

    /// A segment the shape requires is absent.
    #[error("Missing {segment} in \"{value}\"")]
    MissingSegment { segment: Segment, value: String },

    /// The components parse but name no calendar day.
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Calendar arithmetic left the representable range.
    #[error("Date out of range for \"{value}\"")]
    OutOfRange { value: String },

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid day: {0} (must be 1-{max})", max = MAX_DAY)]
    InvalidDay(u8),
}

/// Parameter name reported by [`ParseError::EmptyInput`].
const VALUE_PARAM: &str = "value";

impl AmazonDate {
    /// Parses a slot value.
    ///
    /// `seasons` is usually a [`SeasonTable`]; week slots advance through the
    /// Gregorian calendar when `use_gregorian_calendar` is set and through
    /// the invariant calendar otherwise.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for an empty or whitespace value,
    /// `ParseError::InvalidFormat` when a year, month or week segment is not
    /// an integer, and `ParseError::InvalidDate` when the components name no
    /// real day.
    pub fn parse(
        value: &str,
        seasons: &[Season],
        use_gregorian_calendar: bool,
    ) -> Result<Self, ParseError> {
        let options = ParseOptions::new().with_gregorian_calendar(use_gregorian_calendar);
        Self::parse_with(value, seasons, &options)
    }

    /// Parses a slot value with explicit options.
    ///
    /// # Errors
    /// See [`AmazonDate::parse`].
    pub fn parse_with(
        value: &str,
        seasons: &[Season],
        options: &ParseOptions,
    ) -> Result<Self, ParseError> {
        Self::parse_slot(Some(value), seasons, options)
    }

    /// Parses a slot value that may be absent, as slots often are in
    /// requests.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` when `value` is `None`; otherwise see
    /// [`AmazonDate::parse`].
    pub fn parse_slot(
        value: Option<&str>,
        seasons: &[Season],
        options: &ParseOptions,
    ) -> Result<Self, ParseError> {
        let value = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ParseError::EmptyInput { param: VALUE_PARAM })?;

        parser::parse_slot_value(value, seasons, options)
    }
}
