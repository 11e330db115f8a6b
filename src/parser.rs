//! Classification and resolution of slot values.
//!
//! A normalized slot value is run through [`MATCHERS`] in order; the first
//! matcher that recognizes it decides its [`SlotShape`], and anything left
//! over is read as a month of a year. Resolution then turns the shape into
//! concrete days.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use tracing::{debug, trace};

use crate::calendar::{WeekCalendar, start_of_year};
use crate::consts::{
    DATE_SEPARATOR, DAYS_AFTER_WEEK_START, DECADE_SPAN_YEARS, DECEMBER, GENERIC_SEGMENT, JANUARY,
    LAST_DAY_OF_DECEMBER, MIN_DAY, SHORT_DATE_FORMAT, WEEKEND_SUFFIX, WEEK_PREFIX, YEAR_SLOT_LEN,
};
use crate::season::find_suffix_of;
use crate::{AmazonDate, ParseError, ParseOptions, Season, Segment};

/// Shape of a normalized slot value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SlotShape<'a> {
    /// `2018-WI`
    Season { year: &'a str, season: &'a Season },
    /// `2018`
    Year(&'a str),
    /// `201X`; the digits are not used
    Decade,
    /// `2018-10-20`
    Date(NaiveDate),
    /// `2018-W03`, `2018-W03-WE`
    Week {
        year:    &'a str,
        week:    &'a str,
        weekend: bool,
    },
    /// `2018-10`
    Month { year: &'a str, month: Option<&'a str> },
}

type Matcher = for<'a> fn(&'a str, &'a [Season]) -> Option<SlotShape<'a>>;

/// Tried in order; earlier matchers shadow later ones.
const MATCHERS: [Matcher; 4] = [match_season, match_year_or_decade, match_exact_date, match_week];

/// Removes every generic segment, so `2018-XX-XX` reads as `2018`.
pub(crate) fn normalize(value: &str) -> String {
    let normalized = value.replace(GENERIC_SEGMENT, "");
    if normalized.len() != value.len() {
        trace!(input = value, normalized = %normalized, "Removed generic segments");
    }
    normalized
}

pub(crate) fn classify<'a>(value: &'a str, seasons: &'a [Season]) -> SlotShape<'a> {
    MATCHERS
        .iter()
        .find_map(|matcher| matcher(value, seasons))
        .unwrap_or_else(|| month_of_year(value))
}

/// Normalizes, classifies and resolves a trimmed, non-empty slot value.
pub(crate) fn parse_slot_value(
    value: &str,
    seasons: &[Season],
    options: &ParseOptions,
) -> Result<AmazonDate, ParseError> {
    let normalized = normalize(value);
    let shape = classify(&normalized, seasons);
    debug!(input = value, shape = ?shape, "Classified slot value");
    resolve(&normalized, shape, options)
}

fn match_season<'a>(value: &'a str, seasons: &'a [Season]) -> Option<SlotShape<'a>> {
    let season = find_suffix_of(seasons, value)?;
    let year = value.split_once(DATE_SEPARATOR).map_or(value, |(year, _)| year);
    Some(SlotShape::Season { year, season })
}

fn match_year_or_decade<'a>(value: &'a str, _: &'a [Season]) -> Option<SlotShape<'a>> {
    if value.chars().count() != YEAR_SLOT_LEN {
        return None;
    }
    if value.bytes().all(|b| b.is_ascii_digit()) {
        Some(SlotShape::Year(value))
    } else {
        Some(SlotShape::Decade)
    }
}

fn match_exact_date<'a>(value: &'a str, _: &'a [Season]) -> Option<SlotShape<'a>> {
    if !is_short_date_shaped(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, SHORT_DATE_FORMAT)
        .ok()
        .map(SlotShape::Date)
}

/// `dddd-dd-dd`, nothing more and nothing less.
fn is_short_date_shaped(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == DATE_SEPARATOR as u8,
            _ => b.is_ascii_digit(),
        })
}

fn match_week<'a>(value: &'a str, _: &'a [Season]) -> Option<SlotShape<'a>> {
    let mut segments = value.split(DATE_SEPARATOR);
    let year = segments.next()?;
    let second = segments.next()?;
    if !second.starts_with([WEEK_PREFIX, WEEK_PREFIX.to_ascii_lowercase()]) {
        return None;
    }
    let last = value.rsplit(DATE_SEPARATOR).next().unwrap_or(second);

    Some(SlotShape::Week {
        year,
        week: week_number_text(second),
        weekend: last.to_ascii_uppercase().ends_with(WEEKEND_SUFFIX),
    })
}

/// Only an upper-case prefix is dropped; `w03` stays as is and fails to
/// parse as a number.
fn week_number_text(segment: &str) -> &str {
    segment.strip_prefix(WEEK_PREFIX).unwrap_or(segment)
}

fn month_of_year(value: &str) -> SlotShape<'_> {
    let mut segments = value.split(DATE_SEPARATOR);
    let year = segments.next().unwrap_or(value);
    SlotShape::Month {
        year,
        month: segments.next(),
    }
}

pub(crate) fn resolve(
    value: &str,
    shape: SlotShape<'_>,
    options: &ParseOptions,
) -> Result<AmazonDate, ParseError> {
    match shape {
        SlotShape::Season { year, season } => {
            let (start, end) = season.dates_in(parse_year(year)?)?;
            Ok(AmazonDate::from_days(start, end))
        }
        SlotShape::Year(year) => {
            let year = parse_year(year)?;
            let start = ymd(year, u32::from(JANUARY), u32::from(MIN_DAY))?;
            let end = ymd(year, u32::from(DECEMBER), u32::from(LAST_DAY_OF_DECEMBER))?;
            Ok(AmazonDate::from_days(start, end))
        }
        SlotShape::Decade => {
            let start = start_of_year(options.today()).ok_or_else(|| out_of_range(value))?;
            let end = start
                .checked_add_months(Months::new(DECADE_SPAN_YEARS * 12))
                .ok_or_else(|| out_of_range(value))?;
            Ok(AmazonDate::from_days(start, end))
        }
        SlotShape::Date(date) => Ok(AmazonDate::from_days(date, date)),
        SlotShape::Week {
            year,
            week,
            weekend,
        } => {
            let (start, end) = week_of_year(
                value,
                parse_year(year)?,
                parse_week(week)?,
                options.calendar().calendar(),
            )?;
            if !weekend {
                return Ok(AmazonDate::from_days(start, end));
            }
            let (start, end) = weekend_of(start, end).ok_or_else(|| out_of_range(value))?;
            trace!(input = value, %start, %end, "Narrowed week to its weekend");
            Ok(AmazonDate::from_days(start, end))
        }
        SlotShape::Month { year, month } => {
            let year = parse_year(year)?;
            let month = month.ok_or_else(|| ParseError::MissingSegment {
                segment: Segment::Month,
                value:   value.to_owned(),
            })?;
            let month = parse_number::<u32>(month, Segment::Month)?;
            let start = ymd(year, month, u32::from(MIN_DAY))?;
            let end = start
                .checked_add_months(Months::new(1))
                .and_then(|next| next.checked_sub_days(Days::new(1)))
                .ok_or_else(|| out_of_range(value))?;
            Ok(AmazonDate::from_days(start, end))
        }
    }
}

/// Week `week` counts whole weeks from January 1st; it is not aligned to
/// Mondays.
fn week_of_year(
    value: &str,
    year: i32,
    week: i32,
    calendar: &dyn WeekCalendar,
) -> Result<(NaiveDate, NaiveDate), ParseError> {
    let first = ymd(year, u32::from(JANUARY), u32::from(MIN_DAY))?;
    let start = week
        .checked_sub(1)
        .and_then(|offset| calendar.add_weeks(first, offset))
        .ok_or_else(|| out_of_range(value))?;
    let end = start
        .checked_add_days(Days::new(DAYS_AFTER_WEEK_START))
        .ok_or_else(|| out_of_range(value))?;
    Ok((start, end))
}

/// Saturday and Sunday of the week starting at `start`.
///
/// A week that already starts on Saturday keeps its full span.
fn weekend_of(start: NaiveDate, end: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    match start.weekday() {
        Weekday::Sat => Some((start, end)),
        Weekday::Sun => Some((start.pred_opt()?, start)),
        weekday => {
            let ahead = Weekday::Sat.num_days_from_monday() - weekday.num_days_from_monday();
            let saturday = start.checked_add_days(Days::new(u64::from(ahead)))?;
            Some((saturday, saturday.succ_opt()?))
        }
    }
}

fn parse_year(s: &str) -> Result<i32, ParseError> {
    parse_number(s, Segment::Year)
}

fn parse_week(s: &str) -> Result<i32, ParseError> {
    parse_number(s, Segment::Week)
}

fn parse_number<T: std::str::FromStr>(s: &str, segment: Segment) -> Result<T, ParseError> {
    s.parse::<T>().map_err(|_| ParseError::InvalidFormat {
        segment,
        value: s.to_owned(),
    })
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, ParseError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::InvalidDate { year, month, day })
}

fn out_of_range(value: &str) -> ParseError {
    ParseError::OutOfRange {
        value: value.to_owned(),
    }
}
