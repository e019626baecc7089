//! Snapshot file loading
//!
//! The CLI plays the role of the schedule/booking/settings providers in
//! the engine's caller contract: it reads one internally-consistent
//! snapshot from disk and hands the engine plain values. Parsing goes
//! through the domain types' own validation, so a malformed file fails
//! here with the file's path in the error chain.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use crate::domain::{day_number_of, BookingRecord, BookingSettings, WeeklyScheduleDay};
use crate::engine::{parse_timezone, Clock, SystemClock};

/// Loads the weekly schedule: a JSON array of `WeeklyScheduleDay`.
pub fn load_week(path: &Path) -> Result<Vec<WeeklyScheduleDay>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse schedule file: {}", path.display()))
}

/// Picks the week entry covering `date` (first match wins).
pub fn day_for_date(week: &[WeeklyScheduleDay], date: NaiveDate) -> Option<&WeeklyScheduleDay> {
    let day_number = day_number_of(date);
    week.iter().find(|d| d.day_of_week == day_number)
}

/// Loads the booking snapshot: a JSON array of `BookingRecord`.
pub fn load_bookings(path: &Path) -> Result<Vec<BookingRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bookings file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse bookings file: {}", path.display()))
}

/// Loads booking settings from TOML, via the validating builder.
pub fn load_settings(path: &Path) -> Result<BookingSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))
}

/// Resolves the provider's "now": a `--now` override is taken as already
/// provider-local; otherwise the system clock is read in `tz`.
pub fn resolve_now(tz: &str, now_override: Option<&str>) -> Result<(Tz, NaiveDateTime)> {
    let tz: Tz = parse_timezone(tz)?;

    let now = match now_override {
        Some(s) => s
            .parse::<NaiveDateTime>()
            .with_context(|| format!("Failed to parse --now value '{}' (expected YYYY-MM-DDTHH:MM:SS)", s))?,
        None => SystemClock.now_in_zone(tz),
    };

    Ok((tz, now))
}

/// Parses a `YYYY-MM-DD` calendar date argument.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    s.parse::<NaiveDate>()
        .with_context(|| format!("Failed to parse date '{}' (expected YYYY-MM-DD)", s))
}
