//! Admission rules for candidate appointments.
//!
//! Decides whether a candidate may enter the appointment book. Rules run
//! in a fixed order and the first failure wins:
//! 1. Exact duplicate of a booked appointment
//! 2. Provider already booked at the same date and slot (doctors only)
//! 3. Patient already booked at the same date and slot
//!
//! Technician double-booking is not checked here. The rotation assigner
//! never hands a technician two appointments at one slot, and reschedules
//! re-run its availability check for the carried-over technician.
//!
//! All checks are pure; inserting an admitted appointment is the caller's
//! job.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    Appointment, AppointmentBook, CalendarDate, Person, Provider, Radiology, Timeslot,
};

/// Result of an admission check.
pub type AdmissionResult = Result<(), Rejection>;

/// A refused scheduling request.
///
/// `message` is the user-facing reason, reproduced verbatim by callers.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{message}")]
pub struct Rejection {
    /// Rejection category.
    pub kind: RejectionKind,
    /// Human-readable reason.
    pub message: String,
}

/// Categories of scheduling rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionKind {
    /// The same appointment (or, for imaging, any appointment of the same
    /// patient at that slot) already exists.
    DuplicateAppointment,
    /// The provider is booked at that date and slot.
    ProviderUnavailable,
    /// The patient is booked at that date and slot.
    PatientUnavailable,
    /// Every technician is busy or every matching room is occupied.
    NoTechnicianAvailable,
}

impl Rejection {
    fn new(kind: RejectionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn duplicate(patient: &impl Person) -> Self {
        Self::new(
            RejectionKind::DuplicateAppointment,
            format!(
                "{} has an existing appointment at the same time slot.",
                patient.profile()
            ),
        )
    }

    pub(crate) fn provider_unavailable(provider: &Provider, timeslot: Timeslot) -> Self {
        Self::new(
            RejectionKind::ProviderUnavailable,
            format!("{} is not available at slot {}.", provider, timeslot.code()),
        )
    }

    pub(crate) fn patient_unavailable(
        patient: &impl Person,
        date: CalendarDate,
        timeslot: Timeslot,
    ) -> Self {
        Self::new(
            RejectionKind::PatientUnavailable,
            format!(
                "{} has an existing appointment at {} {}",
                patient.profile(),
                date,
                timeslot
            ),
        )
    }

    pub(crate) fn no_technician(room: Radiology, timeslot: Timeslot) -> Self {
        Self::new(
            RejectionKind::NoTechnicianAvailable,
            format!(
                "Cannot find an available technician at all locations for {} at slot {}.",
                room.name(),
                timeslot.code()
            ),
        )
    }
}

/// Decides whether `candidate` may be added to `book`.
///
/// # Rules (first failure wins)
/// 1. An identical appointment exists → `DuplicateAppointment`
/// 2. A doctor candidate's provider has another appointment at the same
///    (date, slot) → `ProviderUnavailable`. Skipped for technicians.
/// 3. The patient has another appointment at the same (date, slot) with
///    any provider → `PatientUnavailable`
pub fn admit(candidate: &Appointment, book: &AppointmentBook) -> AdmissionResult {
    if book.contains(candidate) {
        return Err(Rejection::duplicate(candidate.patient()));
    }

    let date = candidate.date();
    let timeslot = candidate.timeslot();

    if !candidate.provider().is_technician()
        && book
            .at_slot(date, timeslot)
            .any(|a| a.provider() == candidate.provider())
    {
        return Err(Rejection::provider_unavailable(candidate.provider(), timeslot));
    }

    if book
        .at_slot(date, timeslot)
        .any(|a| a.is_for(candidate.patient()))
    {
        return Err(Rejection::patient_unavailable(candidate.patient(), date, timeslot));
    }

    Ok(())
}

/// Imaging pre-check: the patient must hold no appointment of any kind at
/// `(date, timeslot)`.
///
/// Runs before technician selection so a hopeless request never consumes
/// a rotation search.
pub fn check_patient_free(
    date: CalendarDate,
    timeslot: Timeslot,
    patient: &impl Person,
    book: &AppointmentBook,
) -> AdmissionResult {
    match book.find_for_patient(date, timeslot, patient) {
        Some(_) => Err(Rejection::duplicate(patient)),
        None => Ok(()),
    }
}
