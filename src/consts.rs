/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Maximum day number any month can carry
pub const MAX_DAY: u8 = 31;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for December
pub const DECEMBER: u8 = 12;
/// Last day of December, the inclusive end of a year range
pub const LAST_DAY_OF_DECEMBER: u8 = 31;

/// Marker for an unspecified month or day (`2018-XX`, `2018-10-XX`)
pub const GENERIC_SEGMENT: &str = "-XX";

/// Date component separator
pub const DATE_SEPARATOR: char = '-';

/// Separator between start and end in the display form of a range
pub const RANGE_SEPARATOR: char = '/';

/// Prefix of a week-of-year segment (`W03`)
pub const WEEK_PREFIX: char = 'W';

/// Trailing marker that narrows a week to its weekend (`2018-W03-WE`)
pub const WEEKEND_SUFFIX: &str = "WE";

/// Length of a bare year (`2018`) or decade (`201X`) slot
pub const YEAR_SLOT_LEN: usize = 4;

/// Years added to the start of a decade to reach its end
pub const DECADE_SPAN_YEARS: u32 = 9;

/// Days added to the first day of a week to reach its last day
pub const DAYS_AFTER_WEEK_START: u64 = 6;

/// Strict exact date pattern (`2018-10-20`)
pub const SHORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// UTC timestamp pattern (`2018-10-20T00:00:00Z`)
pub const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Compact date pattern used by Alexa requests (`20181020`)
pub const ALEXA_DATE_FORMAT: &str = "%Y%m%d";
