//! Clinic scheduling context.
//!
//! # Workflow
//!
//! Office request:
//! 1. Booking policy (appointment date, patient date of birth)
//! 2. Doctor lookup by NPI
//! 3. Admission rules, then insert
//!
//! Imaging request:
//! 1. Booking policy
//! 2. Patient pre-check (no appointment of any kind at that slot)
//! 3. Technician rotation picks a provider
//! 4. Admission rules, then insert
//!
//! Every request either completes or leaves the context untouched.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{BookingPolicy, TechnicianRotation};
use crate::error::BookingError;
use crate::models::{
    Appointment, AppointmentBook, CalendarDate, Patient, Profile, Radiology,
    ReportFilter, Timeslot,
};
use crate::roster::Roster;
use crate::sorting::SortKey;
use crate::validation::{self, Rejection};

/// An office visit request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeRequest {
    pub date: CalendarDate,
    pub timeslot: Timeslot,
    pub patient: Profile,
    /// NPI of the requested doctor.
    pub npi: String,
}

impl OfficeRequest {
    pub fn new(
        date: CalendarDate,
        timeslot: Timeslot,
        patient: Profile,
        npi: impl Into<String>,
    ) -> Self {
        Self {
            date,
            timeslot,
            patient,
            npi: npi.into(),
        }
    }
}

/// An imaging visit request. The technician is chosen by rotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagingRequest {
    pub date: CalendarDate,
    pub timeslot: Timeslot,
    pub patient: Profile,
    pub room: Radiology,
}

impl ImagingRequest {
    pub fn new(date: CalendarDate, timeslot: Timeslot, patient: Profile, room: Radiology) -> Self {
        Self {
            date,
            timeslot,
            patient,
            room,
        }
    }
}

/// The single mutable scheduling state: roster, appointment book,
/// technician rotation, booking policy, and clock.
///
/// # Example
///
/// ```
/// use clinic_schedule::models::{CalendarDate, Profile, Timeslot};
/// use clinic_schedule::roster::Roster;
/// use clinic_schedule::scheduler::{BookingPolicy, ClinicScheduler, OfficeRequest};
///
/// let roster = Roster::parse("D  ANDREW  PATEL  1/21/1989  BRIDGEWATER  FAMILY  01").unwrap();
/// let mut clinic = ClinicScheduler::new(roster)
///     .with_policy(BookingPolicy::unrestricted());
///
/// let patient = Profile::new("John", "Doe", CalendarDate::new(12, 13, 1989).unwrap());
/// let request = OfficeRequest::new(
///     CalendarDate::new(11, 4, 2024).unwrap(),
///     Timeslot::from_code(1).unwrap(),
///     patient,
///     "01",
/// );
/// clinic.book_office(request).unwrap();
/// assert_eq!(clinic.book().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ClinicScheduler {
    roster: Roster,
    book: AppointmentBook,
    rotation: TechnicianRotation,
    policy: BookingPolicy,
    today: Option<CalendarDate>,
}

impl ClinicScheduler {
    /// Creates a context over `roster` with an empty book and the default
    /// policy. The rotation is seeded from the roster.
    pub fn new(roster: Roster) -> Self {
        let rotation = roster.rotation();
        Self {
            roster,
            book: AppointmentBook::new(),
            rotation,
            policy: BookingPolicy::default(),
            today: None,
        }
    }

    /// Sets the booking policy.
    pub fn with_policy(mut self, policy: BookingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Pins "today" instead of reading the local clock.
    pub fn with_today(mut self, today: CalendarDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Replaces the rotation (e.g. to restore a saved cursor position).
    pub fn with_rotation(mut self, rotation: TechnicianRotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn book(&self) -> &AppointmentBook {
        &self.book
    }

    pub fn rotation(&self) -> &TechnicianRotation {
        &self.rotation
    }

    pub fn policy(&self) -> &BookingPolicy {
        &self.policy
    }

    fn today(&self) -> CalendarDate {
        self.today.unwrap_or_else(CalendarDate::today)
    }

    fn check_policy(&self, date: CalendarDate, patient: &Profile) -> Result<(), BookingError> {
        let today = self.today();
        self.policy.check_appointment_date(date, today)?;
        self.policy
            .check_date_of_birth(patient.date_of_birth(), today)
    }

    /// Checks admission and inserts. Core entry point for callers that
    /// build appointments themselves.
    pub fn admit(&mut self, candidate: Appointment) -> Result<&Appointment, Rejection> {
        if let Err(rejection) = validation::admit(&candidate, &self.book) {
            warn!("Rejected {}: {}", candidate, rejection);
            return Err(rejection);
        }
        info!("{} booked.", candidate);
        self.book.insert(candidate);
        // just inserted, so the book is non-empty
        Ok(&self.book.as_slice()[self.book.len() - 1])
    }

    /// Books an office visit with the doctor named by NPI.
    pub fn book_office(&mut self, request: OfficeRequest) -> Result<&Appointment, BookingError> {
        self.check_policy(request.date, &request.patient)?;
        let doctor = self
            .roster
            .doctor_by_npi(&request.npi)
            .cloned()
            .ok_or_else(|| BookingError::UnknownProvider(request.npi.clone()))?;

        let candidate =
            Appointment::office(request.date, request.timeslot, request.patient, doctor);
        Ok(self.admit(candidate)?)
    }

    /// Books an imaging visit, choosing the technician by rotation.
    pub fn book_imaging(&mut self, request: ImagingRequest) -> Result<&Appointment, BookingError> {
        self.check_policy(request.date, &request.patient)?;
        let patient = Patient::new(request.patient);
        validation::check_patient_free(request.date, request.timeslot, &patient, &self.book)?;

        let technician =
            self.rotation
                .assign(request.room, request.date, request.timeslot, &self.book)?;
        let candidate = Appointment::imaging(
            request.date,
            request.timeslot,
            patient,
            technician,
            request.room,
        );
        Ok(self.admit(candidate)?)
    }

    /// Cancels the patient's appointment at `(date, timeslot)`.
    pub fn cancel(
        &mut self,
        date: CalendarDate,
        timeslot: Timeslot,
        patient: &Profile,
    ) -> Result<Appointment, BookingError> {
        let target = self
            .book
            .find_for_patient(date, timeslot, &Patient::new(patient.clone()))
            .cloned()
            .ok_or_else(|| BookingError::NotFound {
                date,
                timeslot,
                patient: patient.clone(),
            })?;
        self.book.remove(&target);
        info!("{} {} {} - appointment has been canceled.", date, timeslot, patient);
        Ok(target)
    }

    /// Moves the patient's appointment at `(date, timeslot)` to
    /// `new_timeslot` on the same day, keeping the provider.
    ///
    /// The new appointment is admitted before the old one is removed, so a
    /// refused reschedule leaves the original booking in place. An imaging
    /// appointment additionally requires its technician and room to be
    /// free at the new slot.
    pub fn reschedule(
        &mut self,
        date: CalendarDate,
        timeslot: Timeslot,
        patient: &Profile,
        new_timeslot: Timeslot,
    ) -> Result<&Appointment, BookingError> {
        let old = self
            .book
            .find_for_patient(date, timeslot, &Patient::new(patient.clone()))
            .cloned()
            .ok_or_else(|| BookingError::NotFound {
                date,
                timeslot,
                patient: patient.clone(),
            })?;

        let moved = old.with_timeslot(new_timeslot);
        if let (Some(technician), Some(room)) = (old.provider().as_technician(), old.room()) {
            if !self.book.contains(&moved)
                && !TechnicianRotation::is_available(technician, room, date, new_timeslot, &self.book)
            {
                let rejection = Rejection::provider_unavailable(old.provider(), new_timeslot);
                warn!("Rejected reschedule of {}: {}", old, rejection);
                return Err(rejection.into());
            }
        }

        if let Err(rejection) = validation::admit(&moved, &self.book) {
            warn!("Rejected reschedule of {}: {}", old, rejection);
            return Err(rejection.into());
        }
        self.book.remove(&old);
        info!("Rescheduled to {}", moved);
        self.book.insert(moved);
        Ok(&self.book.as_slice()[self.book.len() - 1])
    }

    /// Sorts the book in place by `key` and returns the filtered view.
    pub fn sorted(&mut self, key: SortKey, filter: ReportFilter) -> Vec<&Appointment> {
        self.book.sort(key);
        self.book.view(filter).collect()
    }
}
