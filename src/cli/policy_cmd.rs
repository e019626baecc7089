//! Policy commands (check-date, can-cancel)

use std::path::Path;

use anyhow::{bail, Result};

use super::inputs;
use super::output::Output;
use crate::engine::policy;

/// Advance-booking-window verdict for a date.
pub fn check_date(
    output: &Output,
    settings_path: &Path,
    date: &str,
    tz: &str,
    now_override: Option<&str>,
) -> Result<()> {
    let date = inputs::parse_date(date)?;
    let settings = inputs::load_settings(settings_path)?;
    let (tz, now) = inputs::resolve_now(tz, now_override)?;
    let today = now.date();

    output.verbose_ctx("check-date", &format!("Today in {} is {}", tz.name(), today));

    let bookable = policy::is_date_bookable(date, settings.advance_booking_days, today);

    if output.is_json() {
        output.data(&serde_json::json!({
            "date": date,
            "today": today,
            "advance_booking_days": settings.advance_booking_days,
            "bookable": bookable,
        }));
    } else if bookable {
        output.message(&format!(
            "{} is bookable (within {} days of {}).",
            date, settings.advance_booking_days, today
        ));
    } else {
        output.message(&format!(
            "{} is not bookable (outside {} days of {}).",
            date, settings.advance_booking_days, today
        ));
    }

    Ok(())
}

/// Cancellation-policy verdict for one booking, addressed by its index in
/// the bookings file.
pub fn can_cancel(
    output: &Output,
    bookings_path: &Path,
    settings_path: &Path,
    index: usize,
    tz: &str,
    now_override: Option<&str>,
) -> Result<()> {
    let bookings = inputs::load_bookings(bookings_path)?;
    let settings = inputs::load_settings(settings_path)?;
    let (tz, now) = inputs::resolve_now(tz, now_override)?;

    let Some(booking) = bookings.get(index) else {
        bail!(
            "No booking at index {} ({} bookings in file)",
            index,
            bookings.len()
        );
    };

    output.verbose_ctx(
        "can-cancel",
        &format!(
            "Booking {} {} at {} in {}",
            booking.date,
            booking.start_time,
            booking.status.label(),
            tz.name()
        ),
    );

    let policy_ok = policy::can_cancel(booking, settings.cancellation_policy_hours, now);
    let customer_ok = policy::customer_can_cancel(booking, &settings, now);

    if output.is_json() {
        output.data(&serde_json::json!({
            "booking": booking,
            "now": now,
            "cancellation_policy_hours": settings.cancellation_policy_hours,
            "can_cancel": policy_ok,
            "customer_can_cancel": customer_ok,
        }));
    } else {
        let verdict = if policy_ok { "may" } else { "may not" };
        output.message(&format!(
            "Booking {} at {} ({}) {} be cancelled under the {}-hour policy.",
            booking.date,
            booking.start_time,
            booking.status.label(),
            verdict,
            settings.cancellation_policy_hours
        ));
        if policy_ok && !customer_ok {
            output.message("Customer cancellation is disabled for this service.");
        }
    }

    Ok(())
}
