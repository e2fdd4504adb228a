//! Render a date range, with optional start and end times, as one short phrase.
//!
//! Information shared by both ends of the range is said once:
//!
//! ```
//! use date_range_formatter::DateRangeFormatter;
//!
//! let range = DateRangeFormatter::new("2009-11-1", "2009-11-3", None, None)?;
//! assert_eq!(range.to_string(), "1st - 3rd November 2009");
//!
//! let range = DateRangeFormatter::new("2009-11-1", "2009-11-1", Some("10:00"), Some("11:00"))?;
//! assert_eq!(range.to_string(), "1st November 2009 at 10:00 to 11:00");
//! # Ok::<(), date_range_formatter::ParseError>(())
//! ```

mod consts;
mod humanise;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod time;
mod types;

pub use consts::*;
pub use humanise::{
    DateFormat, HumaniseOptions, TimePattern, TimePrefix, humanise_date, humanise_date_time,
    humanise_time, ordinal_suffix, ordinalize,
};
pub use range::{DateRangeFormatter, RangeTier};
pub use time::ClockTime;
pub use types::{Day, Hour, Minute, Month, Second, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A calendar date at full day precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    // Field order gives chronological `Ord`
    year:  Year,
    month: Month,
    day:   Day,
}

/// Error raised when a date or time text cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date or time string")]
    EmptyInput,
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(u16),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[error("Invalid hour: {0} (must be 0-{max})", max = MAX_HOUR)]
    InvalidHour(u8),
    #[error("Invalid minute: {0} (must be 0-{max})", max = MAX_MINUTE)]
    InvalidMinute(u8),
    #[error("Invalid second: {0} (must be 0-{max})", max = MAX_SECOND)]
    InvalidSecond(u8),
}

impl CalendarDate {
    /// Creates a date from raw components, validating each against the calendar.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Parses a date component made only of ASCII digits (no sign)
    fn parse_digits<T: FromStr>(s: &str) -> Result<T, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_iso(parts: &[&str]) -> Result<Self, ParseError> {
        let [year, month, day] = parts else {
            return Err(ParseError::InvalidFormat(parts.join("-")));
        };
        Self::new(
            Self::parse_digits(year)?,
            Self::parse_digits(month)?,
            Self::parse_digits(day)?,
        )
    }

    fn parse_day_first(parts: &[&str]) -> Result<Self, ParseError> {
        let [day, month, year] = parts else {
            return Err(ParseError::InvalidFormat(parts.join("/")));
        };
        Self::new(
            Self::parse_digits(year)?,
            Self::parse_digits(month)?,
            Self::parse_digits(day)?,
        )
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Strictly enforce delimiters: DATE_SEPARATOR for ISO, DAY_FIRST_SEPARATOR for day-first
        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(DAY_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {DAY_FIRST_SEPARATOR})"
            )));
        }

        let (separator, parse): (char, fn(&[&str]) -> Result<Self, ParseError>) = if has_hyphen {
            // ISO format: YYYY-M-D
            (DATE_SEPARATOR, Self::parse_iso)
        } else if has_slash {
            // Day-first format: D/M/YYYY
            (DAY_FIRST_SEPARATOR, Self::parse_day_first)
        } else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected a full date (YYYY-M-D or D/M/YYYY): {trimmed}"
            )));
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Wrong number of {separator} separators: expected 2, found {}",
                parts.len() - 1
            )));
        }
        parse(&parts)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_parse_iso_single_digit_components() {
        let parsed = "2009-11-1".parse::<CalendarDate>().expect("failed to parse 2009-11-1");
        assert_eq!(parsed, date(2009, 11, 1));
        assert_eq!(parsed.year().get(), 2009);
        assert_eq!(parsed.month().get(), 11);
        assert_eq!(parsed.day().get(), 1);
    }

    #[test]
    fn test_parse_iso_zero_padded() {
        let parsed = "1996-12-25".parse::<CalendarDate>().expect("failed to parse 1996-12-25");
        assert_eq!(parsed, date(1996, 12, 25));
    }

    #[test]
    fn test_parse_day_first() {
        let parsed = "15/08/1991".parse::<CalendarDate>().expect("failed to parse 15/08/1991");
        assert_eq!(parsed, date(1991, 8, 15));

        // Slash dates are day first, never month first
        let parsed = "11/01/2009".parse::<CalendarDate>().expect("failed to parse 11/01/2009");
        assert_eq!(parsed, date(2009, 1, 11));
        assert_eq!("08/15/1991".parse::<CalendarDate>(), Err(ParseError::InvalidMonth(15)));
    }

    #[test]
    fn test_parse_rejects_signed_components() {
        let cases = [
            ("2009-+11-1", "+11"),
            ("+2009-11-1", "+2009"),
            ("2009-11-+1", "+1"),
            ("+1/11/2009", "+1"),
        ];

        for (input, rejected) in cases {
            assert_eq!(
                input.parse::<CalendarDate>(),
                Err(ParseError::InvalidFormat(rejected.to_owned())),
                "Expected sign rejection for: {input}"
            );
        }
    }

    #[test]
    fn test_parse_with_whitespace() {
        let parsed = " 2009 - 11 - 1 ".parse::<CalendarDate>().expect("failed to parse padded date");
        assert_eq!(parsed, date(2009, 11, 1));
    }

    #[test]
    fn test_parse_rejections() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "",
                description: "empty",
            },
            TestCase {
                input:       "2009",
                description: "year only",
            },
            TestCase {
                input:       "2009-11",
                description: "month precision",
            },
            TestCase {
                input:       "2009-11-1-4",
                description: "too many separators",
            },
            TestCase {
                input:       "2009-11/1",
                description: "mixed delimiters",
            },
            TestCase {
                input:       "2009-XX-01",
                description: "non-numeric month",
            },
            TestCase {
                input:       "2009-13-01",
                description: "month out of range",
            },
            TestCase {
                input:       "2009-02-29",
                description: "february 29th outside a leap year",
            },
            TestCase {
                input:       "0-01-01",
                description: "year zero",
            },
            TestCase {
                input:       "tomorrow",
                description: "free text",
            },
        ];

        for case in &cases {
            assert!(
                case.input.parse::<CalendarDate>().is_err(),
                "Expected failure for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_parse_error_kinds() {
        assert_eq!("".parse::<CalendarDate>(), Err(ParseError::EmptyInput));
        assert_eq!("2009-13-1".parse::<CalendarDate>(), Err(ParseError::InvalidMonth(13)));
        assert_eq!(
            "2009-2-29".parse::<CalendarDate>(),
            Err(ParseError::InvalidDay {
                year:  2009,
                month: 2,
                day:   29,
            })
        );
        assert!(matches!(
            "2009-1-x".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(
            "2008-2-29".parse::<CalendarDate>().expect("2008 is a leap year"),
            date(2008, 2, 29)
        );
    }

    #[test]
    fn test_error_messages() {
        let err = "2009-1-32".parse::<CalendarDate>().expect_err("day 32 is invalid");
        assert_eq!(err.to_string(), "Invalid day 32 for month 2009-01");

        let err = "2009-1-1-1".parse::<CalendarDate>().expect_err("too many separators");
        assert!(err.to_string().contains("expected 2, found 3"));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2009, 11, 1).to_string(), "2009-11-01");
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2009, 11, 1) < date(2009, 11, 3));
        assert!(date(2009, 12, 1) < date(2010, 1, 1));
        assert!(date(2009, 2, 28) < date(2009, 3, 1));
    }

    #[test]
    fn test_serde_string_format() {
        let value = date(2009, 11, 1);
        let json = serde_json::to_string(&value).expect("failed to serialize date");
        assert_eq!(json, r#""2009-11-01""#);

        let parsed: CalendarDate = serde_json::from_str(&json).expect("failed to deserialize date");
        assert_eq!(value, parsed);

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2009-02-30""#);
        assert!(result.is_err());
    }
}
