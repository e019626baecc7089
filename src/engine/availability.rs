//! Availability computation
//!
//! Combines a day's candidate slots with the booking snapshot and the
//! provider's "now" into the final slot list. Pure and deterministic:
//! identical inputs produce an identical, identically-ordered list, and
//! nothing is cached between calls.
//!
//! Availability is a read-model only. Two concurrent booking requests can
//! both observe the same free slot; the storage layer must re-check
//! capacity atomically at commit time.

use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use crate::domain::{
    day_number_of, BookingRecord, BookingSettings, DailyAvailability, TimeInterval, TimeSlot,
    WeeklyScheduleDay,
};

use super::clock::Clock;
use super::{generator, EngineError};

/// Computes the slot list for one date.
///
/// A missing or inactive schedule day yields an empty list without error —
/// a closed day is a normal answer, while a malformed schedule or settings
/// value is a loud one. A slot has passed once its start datetime is
/// before `provider_now`; slots on wholly past dates are therefore never
/// available.
pub fn compute(
    date: NaiveDate,
    schedule_day: Option<&WeeklyScheduleDay>,
    bookings: &[BookingRecord],
    settings: &BookingSettings,
    provider_now: NaiveDateTime,
) -> Result<Vec<TimeSlot>, EngineError> {
    let day = match schedule_day {
        Some(day) if day.is_active => day,
        _ => return Ok(Vec::new()),
    };

    let candidates = generator::generate(day, settings)?;
    let capacity = settings.max_concurrent_bookings;

    let mut slots = Vec::with_capacity(candidates.len());
    for start in candidates {
        let window = TimeInterval::new(start, start.add_minutes(settings.duration_minutes)?);
        let datetime = date.and_time(start.to_naive_time());
        let has_passed = datetime < provider_now;

        let overlapping: Vec<BookingRecord> = bookings
            .iter()
            .filter(|b| b.is_active() && b.interval().overlaps(&window))
            .cloned()
            .collect();
        let booked = overlapping.len() as u32;

        slots.push(TimeSlot {
            start_time: start,
            datetime,
            available: !has_passed && booked < capacity,
            booked,
            capacity,
            overlapping_bookings: overlapping,
        });
    }

    Ok(slots)
}

/// Packages one day's slots with calendar metadata.
///
/// The day of week comes from the calendar date itself, not from any
/// timezone shift — the date names the provider-local day being asked
/// about.
pub fn build(
    date: NaiveDate,
    schedule_day: Option<&WeeklyScheduleDay>,
    bookings: &[BookingRecord],
    settings: &BookingSettings,
    provider_now: NaiveDateTime,
) -> Result<DailyAvailability, EngineError> {
    let slots = compute(date, schedule_day, bookings, settings, provider_now)?;

    Ok(DailyAvailability {
        date,
        day_of_week: day_number_of(date),
        is_available: slots.iter().any(|s| s.available),
        slots,
    })
}

/// [`build`], resolving "now" through a [`Clock`] in the provider's zone.
pub fn build_with_clock(
    date: NaiveDate,
    schedule_day: Option<&WeeklyScheduleDay>,
    bookings: &[BookingRecord],
    settings: &BookingSettings,
    clock: &dyn Clock,
    tz: Tz,
) -> Result<DailyAvailability, EngineError> {
    build(date, schedule_day, bookings, settings, clock.now_in_zone(tz))
}
