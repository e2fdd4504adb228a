use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, ClockTime, DateFormat, HumaniseOptions, ParseError, RANGE_SEPARATOR, TimePattern,
    TimePrefix, humanise::join_trimmed, humanise_date, humanise_date_time, humanise_time,
};

/// A start and end date, each with an optional time, rendered as one phrase.
///
/// The two ends are independent: a range whose end precedes its start is accepted and
/// rendered by the same rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRangeFormatter {
    start_date: CalendarDate,
    end_date:   CalendarDate,
    start_time: Option<ClockTime>,
    end_time:   Option<ClockTime>,
}

/// How much of the calendar the two ends of a range share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeTier {
    SameDay,
    SameMonth,
    SameYear,
    DifferentYears,
}

/// One end of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Start,
    End,
}

impl DateRangeFormatter {
    /// Parses both dates and any times that were given.
    ///
    /// A `None` time means no time, and the time parser is not consulted for it.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first text that fails to parse.
    pub fn new(
        start_date: &str,
        end_date: &str,
        start_time: Option<&str>,
        end_time: Option<&str>,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            start_date: parse_logged(start_date, "start date")?,
            end_date:   parse_logged(end_date, "end date")?,
            start_time: start_time.map(|text| parse_logged(text, "start time")).transpose()?,
            end_time:   end_time.map(|text| parse_logged(text, "end time")).transpose()?,
        })
    }

    /// Builds a formatter from values that are already parsed.
    pub const fn from_parts(
        start_date: CalendarDate,
        end_date: CalendarDate,
        start_time: Option<ClockTime>,
        end_time: Option<ClockTime>,
    ) -> Self {
        Self {
            start_date,
            end_date,
            start_time,
            end_time,
        }
    }

    pub const fn start_date(&self) -> CalendarDate {
        self.start_date
    }

    pub const fn end_date(&self) -> CalendarDate {
        self.end_date
    }

    pub const fn start_time(&self) -> Option<ClockTime> {
        self.start_time
    }

    pub const fn end_time(&self) -> Option<ClockTime> {
        self.end_time
    }

    pub fn same_day(&self) -> bool {
        self.start_date == self.end_date
    }

    pub fn same_month(&self) -> bool {
        self.start_date.month() == self.end_date.month() && self.same_year()
    }

    pub fn same_year(&self) -> bool {
        self.start_date.year() == self.end_date.year()
    }

    /// The narrowest calendar unit both ends share. Checked from day outwards.
    pub fn tier(&self) -> RangeTier {
        if self.same_day() {
            RangeTier::SameDay
        } else if self.same_month() {
            RangeTier::SameMonth
        } else if self.same_year() {
            RangeTier::SameYear
        } else {
            RangeTier::DifferentYears
        }
    }

    /// Renders the range with times as `HH:MM`.
    pub fn humanise(&self) -> String {
        self.humanise_with(TimePattern::default())
    }

    /// Renders the range, eliding the month and year the two ends share.
    ///
    /// Dates are only elided when neither end has a time.
    pub fn humanise_with(&self, time_pattern: TimePattern) -> String {
        let tier = self.tier();
        #[cfg(feature = "log")]
        log::trace!(
            "rendering {} .. {} as {tier:?}",
            self.start_date,
            self.end_date
        );

        let options = HumaniseOptions::default().with_time_pattern(time_pattern);
        match tier {
            RangeTier::SameDay => {
                let end_prefix = if self.start_time.is_some() {
                    TimePrefix::To
                } else {
                    TimePrefix::Until
                };
                let end_time =
                    humanise_time(self.end_time.as_ref(), &options.with_time_prefix(end_prefix));
                join_trimmed(&self.humanise_side(Side::Start, &options), " ", &end_time)
            },
            RangeTier::SameMonth => self.humanise_elided(DateFormat::Day, &options),
            RangeTier::SameYear => self.humanise_elided(DateFormat::DayMonth, &options),
            RangeTier::DifferentYears => join_trimmed(
                &self.humanise_side(Side::Start, &options),
                RANGE_SEPARATOR,
                &self.humanise_side(Side::End, &options),
            ),
        }
    }

    const fn date(&self, side: Side) -> &CalendarDate {
        match side {
            Side::Start => &self.start_date,
            Side::End => &self.end_date,
        }
    }

    const fn time(&self, side: Side) -> Option<&ClockTime> {
        match side {
            Side::Start => self.start_time.as_ref(),
            Side::End => self.end_time.as_ref(),
        }
    }

    const fn has_time(&self) -> bool {
        self.start_time.is_some() || self.end_time.is_some()
    }

    fn humanise_side(&self, side: Side, options: &HumaniseOptions) -> String {
        humanise_date_time(self.date(side), self.time(side), options)
    }

    /// Start side shortened to `start_format` when no times are given, end side in full.
    fn humanise_elided(&self, start_format: DateFormat, options: &HumaniseOptions) -> String {
        let start = if self.has_time() {
            self.humanise_side(Side::Start, options)
        } else {
            humanise_date(&self.start_date, &options.with_date_format(start_format))
        };
        join_trimmed(&start, RANGE_SEPARATOR, &self.humanise_side(Side::End, options))
    }
}

fn parse_logged<T>(text: &str, what: &str) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseError>,
{
    let parsed = text.parse::<T>();
    #[cfg(feature = "log")]
    if let Err(err) = &parsed {
        log::debug!("rejected {what} {text:?}: {err}");
    }
    #[cfg(not(feature = "log"))]
    let _ = what;
    parsed
}

impl fmt::Display for DateRangeFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.humanise())
    }
}
