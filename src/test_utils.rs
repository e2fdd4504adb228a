//! Shorthand constructors for unit tests.

use crate::{CalendarDate, ClockTime, DateRangeFormatter};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("test date should be valid")
}

pub fn time(hour: u8, minute: u8) -> ClockTime {
    ClockTime::new(hour, minute, 0).expect("test time should be valid")
}

/// Parses a formatter from text, panicking on bad fixtures.
pub fn formatter(
    start_date: &str,
    end_date: &str,
    start_time: Option<&str>,
    end_time: Option<&str>,
) -> DateRangeFormatter {
    DateRangeFormatter::new(start_date, end_date, start_time, end_time)
        .expect("test range should parse")
}
