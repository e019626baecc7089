//! The `slots` command

use std::path::Path;

use anyhow::Result;

use super::inputs;
use super::output::Output;
use crate::domain::{weekday_from_number, BookingSettings, DailyAvailability};
use crate::engine::availability;

/// Prints the slot table for one date.
#[allow(clippy::too_many_arguments)]
pub fn run(
    output: &Output,
    schedule_path: &Path,
    bookings_path: &Path,
    settings_path: &Path,
    date: &str,
    tz: &str,
    now_override: Option<&str>,
) -> Result<()> {
    let date = inputs::parse_date(date)?;
    let week = inputs::load_week(schedule_path)?;
    let bookings = inputs::load_bookings(bookings_path)?;
    let settings = inputs::load_settings(settings_path)?;
    let (tz, now) = inputs::resolve_now(tz, now_override)?;

    output.verbose_ctx(
        "slots",
        &format!("Resolved now to {} in {}", now, tz.name()),
    );

    let schedule_day = inputs::day_for_date(&week, date);
    output.verbose_ctx(
        "slots",
        &format!(
            "Schedule entry for {}: {}",
            date,
            if schedule_day.is_some() { "found" } else { "none" }
        ),
    );

    let daily = availability::build(date, schedule_day, &bookings, &settings, now)?;

    if output.is_json() {
        output.data(&daily);
    } else {
        render_text(&daily, &settings);
    }

    Ok(())
}

fn render_text(daily: &DailyAvailability, settings: &BookingSettings) {
    let weekday = weekday_from_number(daily.day_of_week)
        .map(|w| w.to_string())
        .unwrap_or_default();
    println!("Availability for {} ({})", daily.date, weekday);

    if daily.slots.is_empty() {
        println!("No slots: the provider is closed on this day.");
        return;
    }

    println!();
    println!("{:<8} {:<14} {:<8} STATUS", "START", "WINDOW", "BOOKED");
    println!("{}", "-".repeat(44));
    for slot in &daily.slots {
        let window_end = slot
            .start_time
            .add_minutes(settings.duration_minutes)
            .map(|t| t.to_string())
            .unwrap_or_default();
        let status = if slot.available {
            "available"
        } else if slot.booked >= slot.capacity {
            "full"
        } else {
            "passed"
        };
        println!(
            "{:<8} {:<14} {:<8} {}",
            slot.start_time.to_string(),
            format!("{}-{}", slot.start_time, window_end),
            format!("{}/{}", slot.booked, slot.capacity),
            status
        );
    }

    println!();
    let available = daily.slots.iter().filter(|s| s.available).count();
    println!("{} of {} slots available.", available, daily.slots.len());
}
