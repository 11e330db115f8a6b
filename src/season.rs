//! Named yearly seasons per language.
//!
//! The embedded `resources/seasons.json` holds every language in one
//! document, keyed by two-letter language code:
//!
//! ```json
//! { "it": [ { "name": "WI", "startMonth": 12, "startDay": 21, "endMonth": 3, "endDay": 20 } ] }
//! ```
//!
//! Tables are parsed on every [`SeasonTable::load`]; callers that parse many
//! slots should load once and share the result.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prelude::*;
use crate::types::{Month, MonthDay};
use crate::ParseError;

const EMBEDDED_SEASONS: &str = include_str!("../resources/seasons.json");

/// Error type for season table lookups.
#[derive(Debug, thiserror::Error)]
pub enum SeasonError {
    /// No table exists for the requested language code.
    #[error("No seasons found for language \"{language}\"")]
    NotFound { language: String },

    /// The language exists but maps to an empty list.
    #[error("Season table for language \"{language}\" is empty")]
    Empty { language: String },

    /// The season document is malformed.
    #[error("Invalid season document: {0}")]
    Json(#[from] serde_json::Error),
}

/// A recurring yearly season, e.g. winter from Dec 21 to Mar 20.
///
/// The end may fall before the start within the calendar year; the season
/// still belongs to a single nominal year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    name:        String,
    start_month: Month,
    start_day:   MonthDay,
    end_month:   Month,
    end_day:     MonthDay,
}

impl Season {
    /// Creates a season from raw month/day numbers.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` when a
    /// boundary is out of range.
    pub fn new(
        name: impl Into<String>,
        start_month: u8,
        start_day: u8,
        end_month: u8,
        end_day: u8,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            name:        name.into(),
            start_month: Month::new(start_month)?,
            start_day:   MonthDay::new(start_day)?,
            end_month:   Month::new(end_month)?,
            end_day:     MonthDay::new(end_day)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn start_month(&self) -> Month {
        self.start_month
    }

    pub const fn start_day(&self) -> MonthDay {
        self.start_day
    }

    pub const fn end_month(&self) -> Month {
        self.end_month
    }

    pub const fn end_day(&self) -> MonthDay {
        self.end_day
    }

    /// Whether `value` ends with this season's name, ignoring case.
    pub fn is_suffix_of(&self, value: &str) -> bool {
        value.to_lowercase().ends_with(&self.name.to_lowercase())
    }

    /// Places both boundaries in `year`, without carrying the end into the
    /// following year.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDate` when a boundary does not exist in
    /// `year` (Feb 29 outside a leap year, Apr 31, ...).
    pub fn dates_in(&self, year: i32) -> Result<(NaiveDate, NaiveDate), ParseError> {
        let start = boundary(year, self.start_month, self.start_day)?;
        let end = boundary(year, self.end_month, self.end_day)?;
        Ok((start, end))
    }
}

fn boundary(year: i32, month: Month, day: MonthDay) -> Result<NaiveDate, ParseError> {
    NaiveDate::from_ymd_opt(year, month.number(), day.number()).ok_or(ParseError::InvalidDate {
        year,
        month: month.number(),
        day: day.number(),
    })
}

/// The ordered seasons of one language. Order decides which season wins when
/// two names are suffixes of the same slot value.
#[derive(Debug, Clone, PartialEq, Eq, Deref, From, Into)]
pub struct SeasonTable(Vec<Season>);

impl SeasonTable {
    /// Loads the embedded table for a two-letter language code.
    ///
    /// # Errors
    /// Returns `SeasonError::NotFound` if no table exists for `language`.
    pub fn load(language: &str) -> Result<Self, SeasonError> {
        Self::from_json(EMBEDDED_SEASONS, language)
    }

    /// Looks up `language` in a caller-supplied document shaped like the
    /// embedded one.
    ///
    /// # Errors
    /// Returns `SeasonError::Json` if the document is malformed,
    /// `SeasonError::NotFound` if the language is missing and
    /// `SeasonError::Empty` if its list is empty.
    pub fn from_json(document: &str, language: &str) -> Result<Self, SeasonError> {
        let mut tables: HashMap<String, Vec<Season>> = serde_json::from_str(document)?;
        let seasons = tables.remove(language).ok_or_else(|| SeasonError::NotFound {
            language: language.to_owned(),
        })?;
        if seasons.is_empty() {
            return Err(SeasonError::Empty {
                language: language.to_owned(),
            });
        }

        debug!(language, count = seasons.len(), "Loaded season table");
        Ok(Self(seasons))
    }

    /// Language codes available in the embedded resource, sorted.
    ///
    /// # Errors
    /// Returns `SeasonError::Json` if the embedded document is malformed.
    pub fn languages() -> Result<Vec<String>, SeasonError> {
        let tables: HashMap<String, Vec<Season>> = serde_json::from_str(EMBEDDED_SEASONS)?;
        let mut languages: Vec<String> = tables.into_keys().collect();
        languages.sort();
        Ok(languages)
    }

    /// First season whose name is a suffix of `value`.
    pub fn find_suffix_of(&self, value: &str) -> Option<&Season> {
        find_suffix_of(&self.0, value)
    }

    pub fn into_inner(self) -> Vec<Season> {
        self.0
    }
}

/// First season in table order whose name is a suffix of `value`.
pub(crate) fn find_suffix_of<'a>(seasons: &'a [Season], value: &str) -> Option<&'a Season> {
    seasons.iter().find(|season| season.is_suffix_of(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_load_supported_language() {
        let seasons = SeasonTable::load("it").unwrap();
        assert!(!seasons.is_empty());
        assert_eq!(seasons[0].name(), "WI");
    }

    #[test]
    fn test_load_every_embedded_language() {
        for language in SeasonTable::languages().unwrap() {
            let seasons = SeasonTable::load(&language).unwrap();
            assert_eq!(seasons.len(), 4, "language {language}");
        }
    }

    #[test]
    fn test_load_unsupported_language() {
        let result = SeasonTable::load("xx");
        assert!(matches!(result, Err(SeasonError::NotFound { ref language }) if language == "xx"));
        assert_eq!(
            result.unwrap_err().to_string(),
            "No seasons found for language \"xx\""
        );
    }

    #[test]
    fn test_load_is_case_sensitive_on_language() {
        assert!(matches!(SeasonTable::load("IT"), Err(SeasonError::NotFound { .. })));
    }

    #[test]
    fn test_languages_sorted() {
        let languages = SeasonTable::languages().unwrap();
        assert_eq!(languages, ["en", "it"]);

        for language in ["de", "fr", "es", "pt", "ja"] {
            assert!(matches!(SeasonTable::load(language), Err(SeasonError::NotFound { .. })), "{language}");
        }
    }

    #[test]
    fn test_from_json_preserves_order() {
        let json = r#"{ "xx": [
            { "name": "B", "startMonth": 1, "startDay": 1, "endMonth": 2, "endDay": 1 },
            { "name": "A", "startMonth": 3, "startDay": 1, "endMonth": 4, "endDay": 1 }
        ] }"#;
        let seasons = SeasonTable::from_json(json, "xx").unwrap();
        let names: Vec<&str> = seasons.iter().map(Season::name).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_from_json_empty_list() {
        let result = SeasonTable::from_json(r#"{ "xx": [] }"#, "xx");
        assert!(matches!(result, Err(SeasonError::Empty { .. })));
    }

    #[test]
    fn test_from_json_rejects_bad_boundaries() {
        let json = r#"{ "xx": [ { "name": "Q", "startMonth": 13, "startDay": 1, "endMonth": 2, "endDay": 1 } ] }"#;
        assert!(matches!(SeasonTable::from_json(json, "xx"), Err(SeasonError::Json(_))));

        let json = r#"{ "xx": [ { "name": "Q", "startMonth": 1, "startDay": 32, "endMonth": 2, "endDay": 1 } ] }"#;
        assert!(matches!(SeasonTable::from_json(json, "xx"), Err(SeasonError::Json(_))));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(SeasonTable::from_json("not json", "it"), Err(SeasonError::Json(_))));
    }

    #[test]
    fn test_suffix_match_ignores_case() {
        let winter = Season::new("WI", 12, 21, 3, 20).unwrap();
        assert!(winter.is_suffix_of("2018-WI"));
        assert!(winter.is_suffix_of("2018-wi"));
        assert!(winter.is_suffix_of("2018-Wi"));
        assert!(!winter.is_suffix_of("2018-W1"));
        assert!(!winter.is_suffix_of("2018-WIN"));
    }

    #[test]
    fn test_first_suffix_wins() {
        let table = SeasonTable::from(vec![
            Season::new("LONGSU", 7, 1, 8, 31).unwrap(),
            Season::new("SU", 6, 21, 9, 22).unwrap(),
        ]);
        assert_eq!(table.find_suffix_of("2018-LONGSU").map(Season::name), Some("LONGSU"));
        assert_eq!(table.find_suffix_of("2018-SU").map(Season::name), Some("SU"));

        let reversed = SeasonTable::from(vec![
            Season::new("SU", 6, 21, 9, 22).unwrap(),
            Season::new("LONGSU", 7, 1, 8, 31).unwrap(),
        ]);
        assert_eq!(reversed.find_suffix_of("2018-LONGSU").map(Season::name), Some("SU"));
    }

    #[test]
    fn test_dates_in_keeps_nominal_year() {
        let winter = Season::new("WI", 12, 21, 3, 20).unwrap();
        let (start, end) = winter.dates_in(2018).unwrap();
        assert_eq!(start, date(2018, 12, 21));
        assert_eq!(end, date(2018, 3, 20));
    }

    #[test]
    fn test_dates_in_missing_leap_day() {
        let season = Season::new("LEAP", 2, 29, 3, 1).unwrap();
        assert!(season.dates_in(2020).is_ok());
        assert!(matches!(
            season.dates_in(2018),
            Err(ParseError::InvalidDate {
                year: 2018,
                month: 2,
                day: 29
            })
        ));
    }

    #[test]
    fn test_new_rejects_bad_boundaries() {
        assert!(matches!(Season::new("X", 0, 1, 1, 1), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Season::new("X", 1, 1, 1, 32), Err(ParseError::InvalidDay(32))));
    }

    #[test]
    fn test_table_into_vec() {
        let table = SeasonTable::load("en").unwrap();
        let seasons: Vec<Season> = table.clone().into();
        assert_eq!(seasons, table.into_inner());
    }

    #[test]
    fn test_season_serde_field_names() {
        let winter = Season::new("WI", 12, 21, 3, 20).unwrap();
        let json = serde_json::to_string(&winter).unwrap();
        assert_eq!(
            json,
            r#"{"name":"WI","startMonth":12,"startDay":21,"endMonth":3,"endDay":20}"#
        );
    }
}
