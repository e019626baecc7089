//! Clock capability
//!
//! The engine never reads a system clock: every availability and policy
//! computation takes an already-localized `provider_now`. This module is
//! where callers obtain one — `now_in_zone` resolves an instant into the
//! provider's IANA timezone using the bundled tz database, rather than
//! round-tripping through locale-formatted strings.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ClockError {
    #[error("Unknown IANA timezone: '{0}'")]
    UnknownTimezone(String),
}

/// Parses an IANA timezone identifier (e.g., `Europe/Berlin`).
pub fn parse_timezone(s: &str) -> Result<Tz, ClockError> {
    s.parse::<Tz>()
        .map_err(|_| ClockError::UnknownTimezone(s.to_string()))
}

/// A source of "now", localized to a timezone.
///
/// Implementations return the provider's local wall-clock reading; the
/// engine compares it against slot datetimes on the queried date.
pub trait Clock {
    /// Local date and time in `tz` at this clock's current instant.
    fn now_in_zone(&self, tz: Tz) -> NaiveDateTime;
}

/// The real clock, reading the system instant.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_in_zone(&self, tz: Tz) -> NaiveDateTime {
        Utc::now().with_timezone(&tz).naive_local()
    }
}

/// A clock pinned to one instant, for tests and `--now` overrides.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl Clock for FixedClock {
    fn now_in_zone(&self, tz: Tz) -> NaiveDateTime {
        self.instant.with_timezone(&tz).naive_local()
    }
}
