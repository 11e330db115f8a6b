use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::midnight_utc;
use crate::{ParseError, RANGE_SEPARATOR, SHORT_DATE_FORMAT, Segment, prelude::*};

/// A resolved slot value: an inclusive range of days, both ends at midnight
/// UTC.
///
/// Order is not enforced. A season that wraps the year boundary keeps both
/// ends in its nominal year, so `2018-WI` ends on 2018-03-20, before it
/// starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}/{}", "start.format(SHORT_DATE_FORMAT)", "end.format(SHORT_DATE_FORMAT)")]
pub struct AmazonDate {
    start: DateTime<Utc>,
    end:   DateTime<Utc>,
}

impl AmazonDate {
    /// Builds a range from two calendar days.
    pub fn from_days(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: midnight_utc(start),
            end:   midnight_utc(end),
        }
    }

    /// Returns the start of the range
    pub const fn start_date(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the end of the range (inclusive)
    pub const fn end_date(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn start_day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn end_day(&self) -> NaiveDate {
        self.end.date_naive()
    }

    /// Returns both ends as a tuple
    pub const fn dates(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start, self.end)
    }

    /// False for ranges whose end precedes their start.
    pub fn is_chronological(&self) -> bool {
        self.start <= self.end
    }
}

impl FromStr for AmazonDate {
    type Err = ParseError;

    /// Parses the display form, `YYYY-MM-DD/YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (start, end) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| ParseError::MissingSegment {
            segment: Segment::Day,
            value:   trimmed.to_owned(),
        })?;

        Ok(Self::from_days(parse_day(start)?, parse_day(end)?))
    }
}

fn parse_day(s: &str) -> Result<NaiveDate, ParseError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, SHORT_DATE_FORMAT).map_err(|_| ParseError::InvalidFormat {
        segment: Segment::Day,
        value:   s.to_owned(),
    })
}

impl Serialize for AmazonDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AmazonDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
