//! Wall-clock time of day
//!
//! Time format:
//! - Wire form: `HH:MM`, 24-hour (e.g., `09:30`, `17:00`)
//! - Internal form: minutes since midnight (`0..1440`)
//!
//! All schedule arithmetic in the engine happens on the minute count;
//! strings exist only at the parse/format boundary. There is no timezone
//! awareness at this layer — a `TimeOfDay` is a wall-clock reading in
//! whatever zone the surrounding date lives in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TimeError {
    #[error("Invalid time format: expected 'HH:MM' (24-hour), got '{0}'")]
    InvalidFormat(String),

    #[error("Minutes out of range: {0} is not within 0..1440")]
    OutOfRange(u32),
}

/// Minutes per day; all `TimeOfDay` values are strictly below this.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time of day, stored as minutes since midnight.
///
/// Parses from and formats to `HH:MM`. The round-trip
/// `parse(format(t)) == t` holds for every valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, the smallest time of day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Creates a time of day from minutes since midnight.
    pub fn from_minutes(minutes: u32) -> Result<Self, TimeError> {
        if minutes < MINUTES_PER_DAY {
            Ok(Self(minutes as u16))
        } else {
            Err(TimeError::OutOfRange(minutes))
        }
    }

    /// Creates a time of day from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::OutOfRange(hour * 60 + minute));
        }
        Self::from_minutes(hour * 60 + minute)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.0 as u32
    }

    /// Hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.minutes() / 60
    }

    /// Minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.minutes() % 60
    }

    /// Adds a number of minutes, failing if the result leaves the day.
    pub fn add_minutes(&self, minutes: u32) -> Result<TimeOfDay, TimeError> {
        Self::from_minutes(self.minutes() + minutes)
    }

    /// Signed distance in minutes from `earlier` to `self`.
    pub fn minutes_since(&self, earlier: TimeOfDay) -> i64 {
        self.minutes() as i64 - earlier.minutes() as i64
    }

    /// Converts to a `chrono::NaiveTime` for date combination.
    pub fn to_naive_time(&self) -> chrono::NaiveTime {
        // Both components are in range by construction.
        chrono::NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
            .unwrap_or(chrono::NaiveTime::MIN)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    /// Accepts exactly `HH:MM` — two digits, a colon, two digits.
    /// No whitespace, no seconds, no `9:30` shorthand.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimeError::InvalidFormat(s.to_string());

        let (hh, mm) = s.split_once(':').ok_or_else(invalid)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(invalid());
        }
        if !hh.bytes().all(|b| b.is_ascii_digit()) || !mm.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u32 = hh.parse().map_err(|_| invalid())?;
        let minute: u32 = mm.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(Self((hour * 60 + minute) as u16))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}
