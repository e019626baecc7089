//! Computed availability outputs
//!
//! `TimeSlot` and `DailyAvailability` are the engine's only outputs. They
//! are fresh values computed per query — nothing here is persisted, and a
//! recomputation with the same inputs yields the same values in the same
//! order.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::booking::BookingRecord;
use super::time::TimeOfDay;

/// A candidate bookable start time of fixed duration within a working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot start, wall-clock.
    pub start_time: TimeOfDay,

    /// Calendar date and start time combined.
    pub datetime: NaiveDateTime,

    /// True iff the slot has not passed and has spare capacity.
    ///
    /// An `available` slot is a precondition for accepting a booking, not
    /// a reservation: the write layer must re-check capacity atomically at
    /// commit time, or two concurrent requests can both see the same free
    /// slot.
    pub available: bool,

    /// Number of active bookings overlapping this slot.
    pub booked: u32,

    /// Maximum concurrent bookings the slot may hold.
    pub capacity: u32,

    /// The active bookings counted in `booked`.
    pub overlapping_bookings: Vec<BookingRecord>,
}

impl TimeSlot {
    /// Remaining capacity, saturating at zero.
    pub fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.booked)
    }
}

/// One day's slots, packaged for calendar rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAvailability {
    pub date: NaiveDate,

    /// Day of week, `0..=6` with `0 = Sunday`.
    pub day_of_week: u8,

    /// True iff any slot is available.
    pub is_available: bool,

    /// Slots in ascending start order.
    pub slots: Vec<TimeSlot>,
}

impl DailyAvailability {
    /// Slots that can currently accept a booking.
    pub fn available_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter().filter(|s| s.available)
    }

    /// Finds the slot starting at `start`, if one was generated.
    pub fn slot_at(&self, start: TimeOfDay) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.start_time == start)
    }
}
