//! Booking records and status lifecycle
//!
//! Bookings are created and mutated entirely outside the engine; the
//! engine consumes a snapshot of them to count slot occupancy. The status
//! lifecycle is enforced by the booking-write layer, but the transition
//! table lives here so every layer shares one definition of which moves
//! are legal and which statuses still hold a slot.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::interval::TimeInterval;
use super::time::TimeOfDay;

/// Status of a booking
///
/// Lifecycle: `pending → {confirmed, cancelled}`;
/// `confirmed → {completed, cancelled, no-show}`;
/// `completed`, `cancelled` and `no-show` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

impl BookingStatus {
    /// Returns true if this booking occupies slot capacity.
    ///
    /// `completed` still counts — the appointment happened and the slot
    /// was used. Only `cancelled` and `no-show` free the slot up.
    pub fn counts_toward_capacity(&self) -> bool {
        matches!(
            self,
            BookingStatus::Pending | BookingStatus::Confirmed | BookingStatus::Completed
        )
    }

    /// Returns true if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BookingStatus::Cancelled | BookingStatus::Completed | BookingStatus::NoShow
        )
    }

    /// Returns true if the booking has not yet run and can still be
    /// cancelled (subject to the cancellation policy window).
    pub fn is_cancellable(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Legal transitions in the booking lifecycle.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
                | (Confirmed, NoShow)
        )
    }

    /// Wire label for display.
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::NoShow => "no-show",
        }
    }
}

/// One appointment for a service on a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    /// The service this booking is for.
    pub service_id: String,

    /// Calendar date of the appointment (`YYYY-MM-DD`).
    pub date: NaiveDate,

    /// Appointment start (inclusive).
    pub start_time: TimeOfDay,

    /// Appointment end (exclusive).
    pub end_time: TimeOfDay,

    pub status: BookingStatus,
}

impl BookingRecord {
    /// The occupied interval `[start_time, end_time)`.
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start_time, self.end_time)
    }

    /// Date and start time combined, for policy lead-time math.
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time.to_naive_time())
    }

    /// Returns true if this booking occupies slot capacity.
    pub fn is_active(&self) -> bool {
        self.status.counts_toward_capacity()
    }
}
