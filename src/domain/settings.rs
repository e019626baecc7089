//! Booking settings
//!
//! A service's booking policy: slot duration, capacity, buffer, advance
//! window, cancellation window. There are no implicit defaults anywhere in
//! the engine — settings are constructed through the validating builder,
//! and deserialization routes through the same path, so an invalid or
//! partial configuration fails before any slot math runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SettingsError {
    #[error("Missing required setting: {0}")]
    MissingField(&'static str),

    #[error("Invalid duration: duration_minutes must be positive")]
    InvalidDuration,

    #[error("Invalid capacity: max_concurrent_bookings must be at least 1")]
    InvalidCapacity,
}

/// A service's booking policy.
///
/// Invariants (checked by [`BookingSettingsBuilder::build`] and re-checked
/// by [`BookingSettings::validate`] at engine entry points):
/// `duration_minutes > 0` and `max_concurrent_bookings >= 1`. The slot
/// step `duration_minutes + buffer_minutes` is therefore always positive,
/// which is what keeps slot generation finite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookingSettingsBuilder")]
pub struct BookingSettings {
    /// Length of one appointment slot, in minutes.
    pub duration_minutes: u32,

    /// How many bookings one slot may hold concurrently.
    pub max_concurrent_bookings: u32,

    /// How many days ahead a date may be booked (0 = today only).
    pub advance_booking_days: u32,

    /// Idle minutes between the end of one slot and the start of the next.
    pub buffer_minutes: u32,

    /// Minimum lead time, in hours, required to cancel.
    pub cancellation_policy_hours: u32,

    /// Whether new bookings start as `pending` rather than `confirmed`.
    pub require_confirmation: bool,

    /// Whether customers may cancel at all (providers always can).
    pub allow_customer_cancellation: bool,
}

impl BookingSettings {
    pub fn builder() -> BookingSettingsBuilder {
        BookingSettingsBuilder::default()
    }

    /// Re-checks the construction invariants.
    ///
    /// Fields are public, so engine entry points call this rather than
    /// trusting that a value came through the builder.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.duration_minutes == 0 {
            return Err(SettingsError::InvalidDuration);
        }
        if self.max_concurrent_bookings == 0 {
            return Err(SettingsError::InvalidCapacity);
        }
        Ok(())
    }

    /// Minutes between consecutive candidate slot starts.
    pub fn slot_step_minutes(&self) -> u32 {
        self.duration_minutes + self.buffer_minutes
    }
}

/// Builder for [`BookingSettings`]; every field must be supplied.
///
/// Also the deserialization shape: a settings file missing a field fails
/// in [`build`](Self::build) with the field's name rather than silently
/// picking a default.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookingSettingsBuilder {
    duration_minutes: Option<u32>,
    max_concurrent_bookings: Option<u32>,
    advance_booking_days: Option<u32>,
    buffer_minutes: Option<u32>,
    cancellation_policy_hours: Option<u32>,
    require_confirmation: Option<bool>,
    allow_customer_cancellation: Option<bool>,
}

impl BookingSettingsBuilder {
    pub fn duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn max_concurrent_bookings(mut self, capacity: u32) -> Self {
        self.max_concurrent_bookings = Some(capacity);
        self
    }

    pub fn advance_booking_days(mut self, days: u32) -> Self {
        self.advance_booking_days = Some(days);
        self
    }

    pub fn buffer_minutes(mut self, minutes: u32) -> Self {
        self.buffer_minutes = Some(minutes);
        self
    }

    pub fn cancellation_policy_hours(mut self, hours: u32) -> Self {
        self.cancellation_policy_hours = Some(hours);
        self
    }

    pub fn require_confirmation(mut self, required: bool) -> Self {
        self.require_confirmation = Some(required);
        self
    }

    pub fn allow_customer_cancellation(mut self, allowed: bool) -> Self {
        self.allow_customer_cancellation = Some(allowed);
        self
    }

    /// Validates and produces the settings value.
    pub fn build(self) -> Result<BookingSettings, SettingsError> {
        let settings = BookingSettings {
            duration_minutes: self
                .duration_minutes
                .ok_or(SettingsError::MissingField("duration_minutes"))?,
            max_concurrent_bookings: self
                .max_concurrent_bookings
                .ok_or(SettingsError::MissingField("max_concurrent_bookings"))?,
            advance_booking_days: self
                .advance_booking_days
                .ok_or(SettingsError::MissingField("advance_booking_days"))?,
            buffer_minutes: self
                .buffer_minutes
                .ok_or(SettingsError::MissingField("buffer_minutes"))?,
            cancellation_policy_hours: self
                .cancellation_policy_hours
                .ok_or(SettingsError::MissingField("cancellation_policy_hours"))?,
            require_confirmation: self
                .require_confirmation
                .ok_or(SettingsError::MissingField("require_confirmation"))?,
            allow_customer_cancellation: self
                .allow_customer_cancellation
                .ok_or(SettingsError::MissingField("allow_customer_cancellation"))?,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl TryFrom<BookingSettingsBuilder> for BookingSettings {
    type Error = SettingsError;

    fn try_from(builder: BookingSettingsBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
