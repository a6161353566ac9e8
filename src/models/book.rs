//! Appointment book (the in-memory appointment store).
//!
//! An unordered, duplicate-rejecting collection of appointments. Iteration
//! follows insertion order until [`AppointmentBook::sort`] reorders the
//! backing sequence in place.
//!
//! `insert` silently ignores an appointment equal to one already held.
//! Callers that need a reason for a refusal run
//! [`validation::admit`](crate::validation::admit) first.

use serde::{Deserialize, Serialize};

use super::profile::Person;
use super::{Appointment, CalendarDate, Timeslot};
use crate::sorting::{sort_appointments, SortKey};

/// Which appointments a report view includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFilter {
    /// Office and imaging.
    #[default]
    All,
    Office,
    Imaging,
}

impl ReportFilter {
    /// Whether `appointment` passes this filter.
    pub fn accepts(&self, appointment: &Appointment) -> bool {
        match self {
            ReportFilter::All => true,
            ReportFilter::Office => !appointment.is_imaging(),
            ReportFilter::Imaging => appointment.is_imaging(),
        }
    }
}

/// The current set of booked appointments.
///
/// Deserialized books are rebuilt through [`AppointmentBook::insert`], so
/// repeated entries collapse to one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "StoredBook")]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

#[derive(Deserialize)]
struct StoredBook {
    appointments: Vec<Appointment>,
}

impl From<StoredBook> for AppointmentBook {
    fn from(stored: StoredBook) -> Self {
        let mut book = Self::new();
        for appointment in stored.appointments {
            book.insert(appointment);
        }
        book
    }
}

impl AppointmentBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an appointment unless an equal one is already present.
    ///
    /// Returns `true` if the appointment was added.
    pub fn insert(&mut self, appointment: Appointment) -> bool {
        if self.contains(&appointment) {
            return false;
        }
        self.appointments.push(appointment);
        true
    }

    /// Removes the first appointment equal to `appointment`.
    pub fn remove(&mut self, appointment: &Appointment) -> Option<Appointment> {
        let index = self.appointments.iter().position(|a| a == appointment)?;
        Some(self.appointments.remove(index))
    }

    pub fn contains(&self, appointment: &Appointment) -> bool {
        self.appointments.iter().any(|a| a == appointment)
    }

    /// Number of appointments.
    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Iterates in the current backing order.
    pub fn iter(&self) -> std::slice::Iter<'_, Appointment> {
        self.appointments.iter()
    }

    /// Current backing sequence.
    pub fn as_slice(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Reorders the book in place by `key`.
    pub fn sort(&mut self, key: SortKey) {
        sort_appointments(&mut self.appointments, key);
    }

    /// Appointments passing `filter`, in the current backing order.
    pub fn view(&self, filter: ReportFilter) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter().filter(move |a| filter.accepts(a))
    }

    /// All appointments occupying `(date, timeslot)`.
    pub fn at_slot(
        &self,
        date: CalendarDate,
        timeslot: Timeslot,
    ) -> impl Iterator<Item = &Appointment> {
        self.appointments
            .iter()
            .filter(move |a| a.same_slot(date, timeslot))
    }

    /// The patient's appointment at `(date, timeslot)`, if any.
    pub fn find_for_patient(
        &self,
        date: CalendarDate,
        timeslot: Timeslot,
        patient: &impl Person,
    ) -> Option<&Appointment> {
        self.at_slot(date, timeslot).find(|a| a.is_for(patient))
    }

    /// Removes every appointment.
    pub fn clear(&mut self) {
        self.appointments.clear();
    }
}

impl<'a> IntoIterator for &'a AppointmentBook {
    type Item = &'a Appointment;
    type IntoIter = std::slice::Iter<'a, Appointment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
