//! Error types for model construction, roster loading, and booking.
//!
//! Scheduling conflicts are not errors in this sense: they are reported as
//! [`Rejection`](crate::validation::Rejection) values carrying the exact
//! user-facing reason. `BookingError` wraps them when a full booking
//! workflow fails.

use thiserror::Error;

use crate::models::{CalendarDate, Profile, Timeslot};
use crate::validation::Rejection;

/// Failure to construct a domain value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The (month, day, year) triple is not a real calendar date.
    #[error("{month}/{day}/{year} is not a valid calendar date")]
    InvalidCalendarDate { month: u32, day: u32, year: i32 },

    /// Text could not be read as `MM/DD/YYYY`.
    #[error("{0} is not a valid calendar date")]
    MalformedDate(String),

    /// Slot code outside 1–12, or not a number.
    #[error("{0} is not a valid time slot.")]
    InvalidTimeslot(String),

    /// Hour/minute pair that is not on the daily slot grid.
    #[error("{hour:02}:{minute:02} is not on the appointment grid")]
    OffGridTimeslot { hour: u32, minute: u32 },

    #[error("{0} - unknown clinic location.")]
    UnknownLocation(String),

    #[error("{0} - unknown specialty.")]
    UnknownSpecialty(String),

    #[error("{0} - imaging service not provided.")]
    UnknownRadiology(String),
}

/// Failure while loading the provider roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Wrong token count or unknown record tag.
    #[error("roster line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// A field failed domain validation.
    #[error("roster line {line}: {source}")]
    Field {
        line: usize,
        #[source]
        source: ModelError,
    },

    /// Two doctors share an NPI.
    #[error("roster line {line}: duplicate NPI {npi}")]
    DuplicateNpi { line: usize, npi: String },
}

/// Failure of a booking, cancellation, or reschedule request.
///
/// Every variant is recoverable: the scheduling context is left exactly as
/// it was before the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The core rejected the candidate appointment.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The appointment date violates the booking policy.
    #[error("Appointment date: {date} {reason}")]
    AppointmentDate { date: CalendarDate, reason: String },

    /// The patient's date of birth violates the booking policy.
    #[error("Patient dob: {date} {reason}")]
    DateOfBirth { date: CalendarDate, reason: String },

    /// No doctor carries the requested NPI.
    #[error("{0} - provider doesn't exist.")]
    UnknownProvider(String),

    /// Cancel or reschedule target is absent.
    #[error("{date} {timeslot} {patient} - appointment does not exist.")]
    NotFound {
        date: CalendarDate,
        timeslot: Timeslot,
        patient: Profile,
    },
}
