use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Hour, Minute, ParseError, Second, TIME_SEPARATOR};

/// A wall-clock time on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour:   Hour,
    minute: Minute,
    second: Second,
}

impl ClockTime {
    /// Creates a time from raw components.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ParseError> {
        let hour = Hour::new(hour)?;
        let minute = Minute::new(minute)?;
        let second = Second::new(second)?;
        Ok(Self { hour, minute, second })
    }

    pub const fn hour(&self) -> Hour {
        self.hour
    }

    pub const fn minute(&self) -> Minute {
        self.minute
    }

    pub const fn second(&self) -> Second {
        self.second
    }

    /// Parses one numeric clock field of `min..=max` ASCII digits.
    fn parse_field(s: &str, min: usize, max: usize) -> Result<u8, ParseError> {
        if !(min..=max).contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{TIME_SEPARATOR}{}", self.hour, self.minute)?;
        if self.second.get() != 0 {
            write!(f, "{TIME_SEPARATOR}{}", self.second)?;
        }
        Ok(())
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    /// Accepts `H:MM` or `H:MM:SS`, with a one or two digit hour.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(TIME_SEPARATOR).collect();
        let (hour, minute, second) = match parts.as_slice() {
            [hour, minute] => (*hour, *minute, None),
            [hour, minute, second] => (*hour, *minute, Some(*second)),
            _ => {
                return Err(ParseError::InvalidFormat(trimmed.to_owned()));
            },
        };

        let hour = Self::parse_field(hour, 1, 2)?;
        let minute = Self::parse_field(minute, 2, 2)?;
        let second = second.map_or(Ok(0), |second| Self::parse_field(second, 2, 2))?;

        Self::new(hour, minute, second)
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
