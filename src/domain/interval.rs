//! Half-open time intervals
//!
//! Every interval in the engine is half-open: `[start, end)`. The start
//! instant belongs to the interval, the end instant does not, so two
//! intervals that merely touch (`a.end == b.start`) never overlap. This
//! single convention carries the booking-vs-slot and slot-vs-break checks.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::time::TimeOfDay;

/// A half-open interval `[start, end)` within a single day.
///
/// An interval with `start >= end` is empty; empty intervals contain no
/// instants and overlap nothing. Schedule validation rejects empty working
/// windows and breaks before they reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeInterval {
    /// Creates an interval. No ordering is enforced here; see the type docs.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Returns true if the interval contains no instants.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Interval length in minutes (zero when empty).
    pub fn duration_minutes(&self) -> u32 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Returns true if `t` falls inside `[start, end)`.
    pub fn contains(&self, t: TimeOfDay) -> bool {
        self.start <= t && t < self.end
    }

    /// Half-open overlap test: true iff `self.start < other.end` and
    /// `other.start < self.end`. Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns true if `other` lies entirely within `self`.
    pub fn encloses(&self, other: &TimeInterval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
