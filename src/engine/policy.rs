//! Booking policy checks
//!
//! Advance-window and cancellation-window evaluation. Both checks take an
//! explicit caller-supplied "now" (see [`crate::engine::clock`]) and both
//! treat their boundary as inclusive: the last day of the advance window
//! is bookable, and a cancellation exactly at the policy lead time is
//! allowed.

use chrono::{Days, Duration, NaiveDate, NaiveDateTime};

use crate::domain::{BookingRecord, BookingSettings};

/// Returns true if `date` lies within `[today, today + advance_days]`,
/// inclusive on both ends. Dates before today are never bookable.
pub fn is_date_bookable(date: NaiveDate, advance_booking_days: u32, today: NaiveDate) -> bool {
    if date < today {
        return false;
    }
    match today.checked_add_days(Days::new(advance_booking_days as u64)) {
        Some(horizon) => date <= horizon,
        // Horizon past the calendar's end: everything ahead is in range.
        None => true,
    }
}

/// Returns true if `booking` may still be cancelled under the policy.
///
/// Only `pending` and `confirmed` bookings can be cancelled. The lead
/// time from `now` to the booking's start must be at least
/// `cancellation_policy_hours` (boundary inclusive); an appointment that
/// has already started can never be cancelled.
pub fn can_cancel(
    booking: &BookingRecord,
    cancellation_policy_hours: u32,
    now: NaiveDateTime,
) -> bool {
    if !booking.status.is_cancellable() {
        return false;
    }

    let lead = booking.start_datetime() - now;
    if lead < Duration::zero() {
        return false;
    }
    lead >= Duration::hours(cancellation_policy_hours as i64)
}

/// The customer-facing cancellation check: the service must allow
/// customer cancellation at all, and the policy window must be open.
pub fn customer_can_cancel(
    booking: &BookingRecord,
    settings: &BookingSettings,
    now: NaiveDateTime,
) -> bool {
    settings.allow_customer_cancellation
        && can_cancel(booking, settings.cancellation_policy_hours, now)
}
