//! The availability engine
//!
//! Pure computation over the domain snapshot: slot generation,
//! availability calculation, daily assembly, and policy checks. Every
//! operation is a plain function of its inputs — no shared state, no
//! I/O, no system clock — so calls are safe from any number of threads
//! and identical inputs always produce identical outputs.

pub mod availability;
pub mod clock;
pub mod generator;
pub mod policy;

use thiserror::Error;

use crate::domain::{ScheduleError, SettingsError, TimeError};

pub use clock::{parse_timezone, Clock, ClockError, FixedClock, SystemClock};

/// Any input-validation failure an engine entry point can surface.
///
/// All variants are deterministic and fatal to the single call; there is
/// nothing transient to retry in a pure computation.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}
