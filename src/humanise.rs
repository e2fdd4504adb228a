//! Text rendering for dates and times.
//!
//! [`HumaniseOptions`] is a plain value. Callers override single fields and keep the
//! defaults for the rest:
//!
//! ```
//! use date_range_formatter::{CalendarDate, DateFormat, HumaniseOptions, humanise_date};
//!
//! let date: CalendarDate = "2009-11-1".parse()?;
//! let options = HumaniseOptions::default().with_date_format(DateFormat::DayMonth);
//! assert_eq!(humanise_date(&date, &options), "1st November");
//! # Ok::<(), date_range_formatter::ParseError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, ClockTime, prelude::*};

/// How much of a date to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// "1st November 2009"
    #[default]
    Full,
    /// "1st November"
    DayMonth,
    /// "1st"
    Day,
}

/// Word placed before a rendered time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePrefix {
    #[default]
    #[display(fmt = "at")]
    At,
    #[display(fmt = "to")]
    To,
    #[display(fmt = "until")]
    Until,
}

/// Clock layout of a rendered time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePattern {
    /// `HH:MM`
    #[default]
    HourMinute,
    /// `HH:MM:SS`
    HourMinuteSecond,
}

/// Rendering configuration shared by the date and time renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HumaniseOptions {
    pub date_format:  DateFormat,
    pub time_prefix:  TimePrefix,
    pub time_pattern: TimePattern,
}

impl HumaniseOptions {
    #[must_use]
    pub const fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    #[must_use]
    pub const fn with_time_prefix(mut self, time_prefix: TimePrefix) -> Self {
        self.time_prefix = time_prefix;
        self
    }

    #[must_use]
    pub const fn with_time_pattern(mut self, time_pattern: TimePattern) -> Self {
        self.time_pattern = time_pattern;
        self
    }
}

/// English ordinal suffix for `n`: "st", "nd", "rd" or "th".
///
/// Only the magnitude matters, so negative numbers take the suffix of their absolute value.
pub const fn ordinal_suffix(n: i64) -> &'static str {
    let abs = n.unsigned_abs();
    if matches!(abs % 100, 11..=13) {
        return "th";
    }
    match abs % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// `n` followed by its ordinal suffix, e.g. "21st".
pub fn ordinalize(n: i64) -> String {
    format!("{n}{}", ordinal_suffix(n))
}

/// Renders `date` at the granularity chosen by `options.date_format`.
pub fn humanise_date(date: &CalendarDate, options: &HumaniseOptions) -> String {
    let day = ordinalize(i64::from(date.day().get()));
    match options.date_format {
        DateFormat::Full => format!("{day} {} {}", date.month().name(), date.year()),
        DateFormat::DayMonth => format!("{day} {}", date.month().name()),
        DateFormat::Day => day,
    }
}

/// Renders `time` behind its prefix, or an empty string when there is no time.
pub fn humanise_time(time: Option<&ClockTime>, options: &HumaniseOptions) -> String {
    time.map_or_else(String::new, |time| {
        format!("{} {}", options.time_prefix, ClockPattern(time, options.time_pattern))
    })
}

/// Date and optional time joined by a single space.
pub fn humanise_date_time(
    date: &CalendarDate,
    time: Option<&ClockTime>,
    options: &HumaniseOptions,
) -> String {
    join_trimmed(&humanise_date(date, options), " ", &humanise_time(time, options))
}

/// Joins two rendered parts and trims the result, so empty parts leave no stray separator.
pub(crate) fn join_trimmed(left: &str, separator: &str, right: &str) -> String {
    format!("{left}{separator}{right}").trim().to_owned()
}

struct ClockPattern<'a>(&'a ClockTime, TimePattern);

impl fmt::Display for ClockPattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(time, pattern) = self;
        write!(f, "{}:{}", time.hour(), time.minute())?;
        if *pattern == TimePattern::HourMinuteSecond {
            write!(f, ":{}", time.second())?;
        }
        Ok(())
    }
}
