//! Avail - Booking availability and scheduling engine
//!
//! Avail turns a provider's weekly working hours, breaks, existing
//! bookings, and booking policy into a precise set of bookable time
//! slots, and enforces advance-booking and cancellation policy windows.
//! The engine is a pure, stateless library: it owns no storage, performs
//! no I/O, and never reads the system clock itself — callers supply a
//! snapshot of schedule and bookings plus a timezone-resolved "now".

pub mod cli;
pub mod domain;
pub mod engine;

pub use domain::{
    BookingRecord, BookingSettings, BookingStatus, BreakInterval, DailyAvailability, TimeOfDay,
    TimeSlot, WeeklyScheduleDay,
};
pub use engine::{Clock, EngineError, FixedClock, SystemClock};
