//! Candidate slot generation
//!
//! Walks a working day from `start_time`, emitting a candidate start
//! every `duration + buffer` minutes for as long as the full appointment
//! window still fits before `end_time` (a window ending exactly at close
//! is kept). A candidate is dropped when its whole window overlaps a
//! break — not just when its start instant lands inside one — so no
//! emitted slot ever runs into a break.

use crate::domain::{BookingSettings, TimeInterval, TimeOfDay, WeeklyScheduleDay};

use super::EngineError;

/// Enumerates candidate start times for one working day.
///
/// Validates the schedule day and settings first, so a malformed
/// configuration fails loudly instead of producing an empty day. The
/// settings invariant `duration_minutes > 0` is what bounds the walk.
pub fn generate(
    day: &WeeklyScheduleDay,
    settings: &BookingSettings,
) -> Result<Vec<TimeOfDay>, EngineError> {
    day.validate()?;
    settings.validate()?;

    let duration = settings.duration_minutes;
    let step = settings.slot_step_minutes();
    let end = day.end_time.minutes();

    let mut candidates = Vec::new();
    let mut cursor = day.start_time.minutes();

    while cursor + duration <= end {
        let window = TimeInterval::new(
            TimeOfDay::from_minutes(cursor)?,
            TimeOfDay::from_minutes(cursor + duration)?,
        );

        let in_break = day
            .breaks
            .iter()
            .any(|brk| brk.interval().overlaps(&window));
        if !in_break {
            candidates.push(window.start);
        }

        cursor += step;
    }

    Ok(candidates)
}
