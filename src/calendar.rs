//! Calendar arithmetic consumed by the slot parser.
//!
//! Week offsets go through [`WeekCalendar`] so callers pick the calendar
//! system explicitly. Every date handed back to callers is pinned to
//! midnight UTC.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use crate::consts::{ALEXA_DATE_FORMAT, UTC_FORMAT};
use crate::prelude::*;

/// Adds whole weeks to a date under some calendar system.
pub trait WeekCalendar {
    /// Returns `date` moved by `weeks` weeks (negative moves backwards), or
    /// `None` when the result leaves the representable range.
    fn add_weeks(&self, date: NaiveDate, weeks: i32) -> Option<NaiveDate>;
}

/// The proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GregorianCalendar;

impl WeekCalendar for GregorianCalendar {
    fn add_weeks(&self, date: NaiveDate, weeks: i32) -> Option<NaiveDate> {
        date.checked_add_signed(Duration::weeks(i64::from(weeks)))
    }
}

/// The culture-neutral calendar used when no calendar system is requested.
///
/// The invariant culture is itself backed by the Gregorian calendar, so week
/// offsets land on the same dates as [`GregorianCalendar`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvariantCalendar;

impl WeekCalendar for InvariantCalendar {
    fn add_weeks(&self, date: NaiveDate, weeks: i32) -> Option<NaiveDate> {
        GregorianCalendar.add_weeks(date, weeks)
    }
}

/// Selects which [`WeekCalendar`] the parser uses for week-of-year slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum CalendarSystem {
    #[default]
    #[display(fmt = "invariant")]
    Invariant,
    #[display(fmt = "gregorian")]
    Gregorian,
}

impl CalendarSystem {
    /// Maps the `use_gregorian_calendar` flag of the parse entry point.
    pub const fn from_gregorian_flag(use_gregorian_calendar: bool) -> Self {
        if use_gregorian_calendar {
            Self::Gregorian
        } else {
            Self::Invariant
        }
    }

    pub fn calendar(self) -> &'static dyn WeekCalendar {
        match self {
            Self::Invariant => &InvariantCalendar,
            Self::Gregorian => &GregorianCalendar,
        }
    }
}

/// Pins a calendar date to 00:00:00 UTC.
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}

/// String and truncation helpers for the UTC timestamps the parser produces.
pub trait DateTimeExt {
    /// Drops the time of day, keeping year, month and day.
    fn as_midnight_utc(&self) -> DateTime<Utc>;

    /// Formats as `yyyy-MM-ddTHH:mm:ssZ`.
    fn to_utc_string(&self) -> String;

    /// Formats as `yyyyMMdd`, the compact form Alexa requests use.
    fn to_alexa_date(&self) -> String;
}

impl DateTimeExt for DateTime<Utc> {
    fn as_midnight_utc(&self) -> DateTime<Utc> {
        midnight_utc(self.date_naive())
    }

    fn to_utc_string(&self) -> String {
        self.format(UTC_FORMAT).to_string()
    }

    fn to_alexa_date(&self) -> String {
        self.format(ALEXA_DATE_FORMAT).to_string()
    }
}

/// First day of the year `date` falls in.
pub(crate) fn start_of_year(date: NaiveDate) -> Option<NaiveDate> {
    date.with_ordinal(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, utc};
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_add_weeks_forward_and_back() {
        struct TestCase {
            weeks:       i32,
            expected:    NaiveDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                weeks:       0,
                expected:    date(2018, 1, 1),
                description: "no offset",
            },
            TestCase {
                weeks:       2,
                expected:    date(2018, 1, 15),
                description: "third week",
            },
            TestCase {
                weeks:       52,
                expected:    date(2018, 12, 31),
                description: "last day of a 365-day year",
            },
            TestCase {
                weeks:       -1,
                expected:    date(2017, 12, 25),
                description: "week zero rolls into the previous year",
            },
        ];

        for case in &cases {
            for system in [CalendarSystem::Invariant, CalendarSystem::Gregorian] {
                assert_eq!(
                    system.calendar().add_weeks(date(2018, 1, 1), case.weeks),
                    Some(case.expected),
                    "{} under {system}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_add_weeks_overflow() {
        assert_eq!(GregorianCalendar.add_weeks(NaiveDate::MAX, 1), None);
        assert_eq!(InvariantCalendar.add_weeks(NaiveDate::MIN, -1), None);
    }

    #[test]
    fn test_gregorian_flag() {
        assert_eq!(CalendarSystem::from_gregorian_flag(true), CalendarSystem::Gregorian);
        assert_eq!(CalendarSystem::from_gregorian_flag(false), CalendarSystem::Invariant);
        assert_eq!(CalendarSystem::default(), CalendarSystem::Invariant);
    }

    #[test]
    fn test_midnight_utc() {
        let dt = midnight_utc(date(2018, 10, 20));
        assert_eq!(dt, Utc.with_ymd_and_hms(2018, 10, 20, 0, 0, 0).unwrap());
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_as_midnight_utc_truncates() {
        let afternoon = Utc.with_ymd_and_hms(2018, 10, 20, 15, 42, 7).unwrap();
        assert_eq!(afternoon.as_midnight_utc(), utc(2018, 10, 20));
    }

    #[test]
    fn test_start_of_year() {
        assert_eq!(start_of_year(date(2018, 10, 20)), Some(date(2018, 1, 1)));
        assert_eq!(start_of_year(date(2020, 12, 31)), Some(date(2020, 1, 1)));
    }

    #[test]
    fn test_string_formats() {
        let dt = utc(2018, 1, 5);
        assert_eq!(dt.to_utc_string(), "2018-01-05T00:00:00Z");
        assert_eq!(dt.to_alexa_date(), "20180105");
    }
}
