//! Acceptance scenarios for the availability engine
//!
//! End-to-end checks through the public library API: a provider's week,
//! a booking snapshot, and a pinned "now" go in; the slot table and
//! policy verdicts come out.

use chrono::{NaiveDate, NaiveDateTime};

use avail_cli::domain::{
    BookingRecord, BookingSettings, BookingStatus, BreakInterval, TimeOfDay, WeeklyScheduleDay,
};
use avail_cli::engine::{availability, policy};

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn at(date_s: &str, time_s: &str) -> NaiveDateTime {
    date(date_s).and_time(t(time_s).to_naive_time())
}

fn settings(duration: u32, buffer: u32, capacity: u32) -> BookingSettings {
    BookingSettings::builder()
        .duration_minutes(duration)
        .max_concurrent_bookings(capacity)
        .advance_booking_days(30)
        .buffer_minutes(buffer)
        .cancellation_policy_hours(24)
        .require_confirmation(false)
        .allow_customer_cancellation(true)
        .build()
        .unwrap()
}

fn booking(date_s: &str, start: &str, end: &str, status: BookingStatus) -> BookingRecord {
    BookingRecord {
        service_id: "svc-1".to_string(),
        date: date(date_s),
        start_time: t(start),
        end_time: t(end),
        status,
    }
}

// 2026-08-07 is a Friday (day 5); all scenarios query this date.
const DATE: &str = "2026-08-07";

fn friday(start: &str, end: &str) -> WeeklyScheduleDay {
    WeeklyScheduleDay::new(5, t(start), t(end))
}

#[test]
fn hourly_day_yields_eight_slots_and_no_closing_time_slot() {
    let day = friday("09:00", "17:00");
    let slots = availability::compute(
        date(DATE),
        Some(&day),
        &[],
        &settings(60, 0, 1),
        at("2026-01-01", "00:00"),
    )
    .unwrap();

    let starts: Vec<String> = slots.iter().map(|s| s.start_time.to_string()).collect();
    assert_eq!(
        starts,
        vec!["09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00"]
    );
    assert!(!starts.contains(&"17:00".to_string()));
}

#[test]
fn lunch_break_removes_its_slot_but_keeps_the_touching_one() {
    let mut day = friday("09:00", "17:00");
    day.breaks.push(BreakInterval::new(t("13:00"), t("14:00")));

    let slots = availability::compute(
        date(DATE),
        Some(&day),
        &[],
        &settings(60, 0, 1),
        at("2026-01-01", "00:00"),
    )
    .unwrap();

    let starts: Vec<String> = slots.iter().map(|s| s.start_time.to_string()).collect();
    // 12:00 ends exactly when the break starts: half-open, kept.
    assert!(starts.contains(&"12:00".to_string()));
    assert!(!starts.contains(&"13:00".to_string()));
    assert!(starts.contains(&"14:00".to_string()));
}

#[test]
fn slot_five_minutes_gone_is_unavailable_no_matter_the_bookings() {
    let day = friday("09:00", "17:00");
    let slots = availability::compute(
        date(DATE),
        Some(&day),
        &[],
        &settings(30, 0, 5),
        at(DATE, "10:05"),
    )
    .unwrap();

    let ten = slots.iter().find(|s| s.start_time == t("10:00")).unwrap();
    assert_eq!(ten.booked, 0);
    assert!(!ten.available);
}

#[test]
fn cancelling_one_of_two_bookings_reopens_the_slot() {
    let day = friday("09:00", "17:00");
    let settings = settings(30, 0, 2);
    let now = at("2026-01-01", "00:00");

    let mut bookings = vec![
        booking(DATE, "09:00", "09:30", BookingStatus::Confirmed),
        booking(DATE, "09:00", "09:30", BookingStatus::Pending),
    ];

    let slots =
        availability::compute(date(DATE), Some(&day), &bookings, &settings, now).unwrap();
    let nine = slots.iter().find(|s| s.start_time == t("09:00")).unwrap();
    assert_eq!(nine.booked, 2);
    assert!(!nine.available);

    bookings[1].status = BookingStatus::Cancelled;

    let slots =
        availability::compute(date(DATE), Some(&day), &bookings, &settings, now).unwrap();
    let nine = slots.iter().find(|s| s.start_time == t("09:00")).unwrap();
    assert_eq!(nine.booked, 1);
    assert!(nine.available);
}

#[test]
fn cancellation_window_boundary() {
    let b = booking("2026-08-08", "10:00", "11:00", BookingStatus::Confirmed);

    // Exactly 24 hours of lead: allowed.
    assert!(policy::can_cancel(&b, 24, at(DATE, "10:00")));

    // One minute short: refused.
    assert!(!policy::can_cancel(&b, 24, at(DATE, "10:01")));
}

#[test]
fn advance_window_boundary() {
    let today = date(DATE);
    assert!(policy::is_date_bookable(date("2026-09-06"), 30, today));
    assert!(!policy::is_date_bookable(date("2026-09-07"), 30, today));
}

#[test]
fn recomputation_is_byte_for_byte_identical() {
    let mut day = friday("08:30", "18:15");
    day.breaks.push(BreakInterval::new(t("12:30"), t("13:15")));
    let settings = settings(45, 10, 3);
    let bookings = vec![
        booking(DATE, "08:30", "09:15", BookingStatus::Confirmed),
        booking(DATE, "09:00", "10:00", BookingStatus::Pending),
        booking(DATE, "14:00", "14:45", BookingStatus::NoShow),
    ];
    let now = at(DATE, "11:11");

    let first =
        availability::build(date(DATE), Some(&day), &bookings, &settings, now).unwrap();
    let second =
        availability::build(date(DATE), Some(&day), &bookings, &settings, now).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn every_slot_fits_inside_the_working_window() {
    let mut day = friday("08:20", "17:35");
    day.breaks.push(BreakInterval::new(t("11:00"), t("11:40")));
    let settings = settings(50, 5, 2);

    let slots = availability::compute(
        date(DATE),
        Some(&day),
        &[],
        &settings,
        at("2026-01-01", "00:00"),
    )
    .unwrap();

    assert!(!slots.is_empty());
    for slot in slots {
        assert!(slot.start_time >= day.start_time);
        assert!(
            slot.start_time.minutes() + settings.duration_minutes <= day.end_time.minutes(),
            "slot {} overruns closing time",
            slot.start_time
        );
    }
}
