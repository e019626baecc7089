//! Weekly schedule model
//!
//! A provider's working hours are one `WeeklyScheduleDay` per weekday:
//! an open window `[start_time, end_time)` with zero or more break
//! sub-intervals. Days are numbered `0..=6` with `0 = Sunday`, matching
//! the convention marketplace clients send over the wire.
//!
//! A malformed schedule is a configuration error, not an empty day:
//! `validate()` fails loudly so callers can distinguish "closed" from
//! "broken" (an inactive day, by contrast, simply yields no slots).

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::interval::TimeInterval;
use super::time::TimeOfDay;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScheduleError {
    #[error("Invalid day of week: expected 0-6 (0 = Sunday), got {0}")]
    InvalidDayOfWeek(u8),

    #[error("Invalid working window: start {start} is not before end {end}")]
    EmptyWorkingWindow { start: TimeOfDay, end: TimeOfDay },

    #[error("Break {break_interval} extends outside working window {window}")]
    BreakOutOfBounds {
        break_interval: TimeInterval,
        window: TimeInterval,
    },

    #[error("Break {first} overlaps break {second}")]
    OverlappingBreaks {
        first: TimeInterval,
        second: TimeInterval,
    },
}

/// Converts a `0..=6` day number (0 = Sunday) to a `chrono::Weekday`.
pub fn weekday_from_number(day_of_week: u8) -> Result<Weekday, ScheduleError> {
    match day_of_week {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(ScheduleError::InvalidDayOfWeek(other)),
    }
}

/// Day number (`0 = Sunday`) for a calendar date.
pub fn day_number_of(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// A provider-declared unavailable sub-interval within open hours.
///
/// Half-open `[start, end)`, like every interval in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,

    /// Optional display label ("lunch", "school run").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl BreakInterval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            start,
            end,
            label: None,
        }
    }

    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start, self.end)
    }
}

/// One weekday's working hours for a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyScheduleDay {
    /// Day of week, `0..=6` with `0 = Sunday`.
    pub day_of_week: u8,

    /// Start of the open window (inclusive).
    pub start_time: TimeOfDay,

    /// End of the open window (exclusive).
    pub end_time: TimeOfDay,

    /// Breaks within the open window, in ascending order.
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,

    /// Inactive days produce no slots (and no error).
    pub is_active: bool,
}

impl WeeklyScheduleDay {
    /// Creates an active day with no breaks.
    pub fn new(day_of_week: u8, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Self {
            day_of_week,
            start_time,
            end_time,
            breaks: Vec::new(),
            is_active: true,
        }
    }

    /// The open window `[start_time, end_time)`.
    pub fn working_window(&self) -> TimeInterval {
        TimeInterval::new(self.start_time, self.end_time)
    }

    /// The weekday this entry covers.
    pub fn weekday(&self) -> Result<Weekday, ScheduleError> {
        weekday_from_number(self.day_of_week)
    }

    /// Checks the structural invariants:
    /// - `day_of_week` is `0..=6`
    /// - `start_time < end_time`
    /// - every break lies within `[start_time, end_time)`
    /// - breaks do not overlap one another
    pub fn validate(&self) -> Result<(), ScheduleError> {
        weekday_from_number(self.day_of_week)?;

        let window = self.working_window();
        if window.is_empty() {
            return Err(ScheduleError::EmptyWorkingWindow {
                start: self.start_time,
                end: self.end_time,
            });
        }

        for brk in &self.breaks {
            let b = brk.interval();
            if b.is_empty() || !window.encloses(&b) {
                return Err(ScheduleError::BreakOutOfBounds {
                    break_interval: b,
                    window,
                });
            }
        }

        for (i, first) in self.breaks.iter().enumerate() {
            for second in &self.breaks[i + 1..] {
                if first.interval().overlaps(&second.interval()) {
                    return Err(ScheduleError::OverlappingBreaks {
                        first: first.interval(),
                        second: second.interval(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn nine_to_five(day_of_week: u8) -> WeeklyScheduleDay {
        WeeklyScheduleDay::new(day_of_week, t("09:00"), t("17:00"))
    }

    #[test]
    fn valid_day_passes() {
        let mut day = nine_to_five(1);
        day.breaks.push(BreakInterval::new(t("13:00"), t("14:00")));
        assert_eq!(day.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_day_number() {
        let day = nine_to_five(7);
        assert_eq!(day.validate(), Err(ScheduleError::InvalidDayOfWeek(7)));
    }

    #[test]
    fn rejects_inverted_window() {
        let day = WeeklyScheduleDay::new(1, t("17:00"), t("09:00"));
        assert!(matches!(
            day.validate(),
            Err(ScheduleError::EmptyWorkingWindow { .. })
        ));
    }

    #[test]
    fn rejects_zero_length_window() {
        let day = WeeklyScheduleDay::new(1, t("09:00"), t("09:00"));
        assert!(matches!(
            day.validate(),
            Err(ScheduleError::EmptyWorkingWindow { .. })
        ));
    }

    #[test]
    fn rejects_break_outside_window() {
        let mut day = nine_to_five(1);
        day.breaks.push(BreakInterval::new(t("08:00"), t("09:30")));
        assert!(matches!(
            day.validate(),
            Err(ScheduleError::BreakOutOfBounds { .. })
        ));
    }

    #[test]
    fn rejects_empty_break() {
        let mut day = nine_to_five(1);
        day.breaks.push(BreakInterval::new(t("12:00"), t("12:00")));
        assert!(matches!(
            day.validate(),
            Err(ScheduleError::BreakOutOfBounds { .. })
        ));
    }

    #[test]
    fn break_may_touch_window_end() {
        // Break end is exclusive, so ending exactly at close is in bounds.
        let mut day = nine_to_five(1);
        day.breaks.push(BreakInterval::new(t("16:00"), t("17:00")));
        assert_eq!(day.validate(), Ok(()));
    }

    #[test]
    fn rejects_overlapping_breaks() {
        let mut day = nine_to_five(1);
        day.breaks.push(BreakInterval::new(t("12:00"), t("13:00")));
        day.breaks.push(BreakInterval::new(t("12:30"), t("14:00")));
        assert!(matches!(
            day.validate(),
            Err(ScheduleError::OverlappingBreaks { .. })
        ));
    }

    #[test]
    fn adjacent_breaks_are_fine() {
        let mut day = nine_to_five(1);
        day.breaks.push(BreakInterval::new(t("12:00"), t("13:00")));
        day.breaks.push(BreakInterval::new(t("13:00"), t("13:30")));
        assert_eq!(day.validate(), Ok(()));
    }

    #[test]
    fn weekday_numbering_starts_at_sunday() {
        assert_eq!(weekday_from_number(0), Ok(Weekday::Sun));
        assert_eq!(weekday_from_number(6), Ok(Weekday::Sat));
        assert_eq!(
            weekday_from_number(9),
            Err(ScheduleError::InvalidDayOfWeek(9))
        );
    }

    #[test]
    fn day_number_from_date() {
        // 2026-08-02 is a Sunday.
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 2).unwrap();
        assert_eq!(day_number_of(sunday), 0);
        assert_eq!(day_number_of(sunday + chrono::Days::new(3)), 3);
    }

    #[test]
    fn serde_roundtrip() {
        let mut day = nine_to_five(2);
        let mut brk = BreakInterval::new(t("13:00"), t("14:00"));
        brk.label = Some("lunch".to_string());
        day.breaks.push(brk);

        let json = serde_json::to_string(&day).unwrap();
        let parsed: WeeklyScheduleDay = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, day);
    }

    #[test]
    fn deserializes_without_breaks_field() {
        let json = r#"{"day_of_week":1,"start_time":"09:00","end_time":"17:00","is_active":true}"#;
        let day: WeeklyScheduleDay = serde_json::from_str(json).unwrap();
        assert!(day.breaks.is_empty());
        assert_eq!(day.validate(), Ok(()));
    }
}
