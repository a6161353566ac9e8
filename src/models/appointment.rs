//! Appointment model.
//!
//! An appointment books a patient with a provider on a date and timeslot.
//! Office visits are with a doctor; imaging visits are with a technician
//! and name the radiology room they need.
//!
//! The constructors take the concrete provider type, so an office visit
//! with a technician (or the reverse) cannot be built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::profile::{Patient, Person};
use super::provider::{Doctor, Provider, Technician};
use super::{CalendarDate, Timeslot};
use crate::error::ModelError;

/// Imaging room types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Radiology {
    Catscan,
    Ultrasound,
    Xray,
}

impl Radiology {
    pub const ALL: [Radiology; 3] = [Radiology::Catscan, Radiology::Ultrasound, Radiology::Xray];

    /// Upper-case enumeration name (e.g. `XRAY`).
    pub fn name(&self) -> &'static str {
        match self {
            Radiology::Catscan => "CATSCAN",
            Radiology::Ultrasound => "ULTRASOUND",
            Radiology::Xray => "XRAY",
        }
    }

    /// Human-readable service name.
    pub fn service_name(&self) -> &'static str {
        match self {
            Radiology::Catscan => "CAT Scan",
            Radiology::Ultrasound => "Ultrasound",
            Radiology::Xray => "X-Ray",
        }
    }
}

impl fmt::Display for Radiology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_name())
    }
}

impl FromStr for Radiology {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ModelError::UnknownRadiology(s.to_string()))
    }
}

/// Office visit or imaging visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentKind {
    Office,
    Imaging { room: Radiology },
}

/// A booked (or candidate) appointment.
///
/// Equality covers every field, including the imaging room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Appointment {
    date: CalendarDate,
    timeslot: Timeslot,
    patient: Patient,
    provider: Provider,
    kind: AppointmentKind,
}

impl Appointment {
    /// An office visit with a doctor.
    pub fn office(
        date: CalendarDate,
        timeslot: Timeslot,
        patient: impl Into<Patient>,
        doctor: Doctor,
    ) -> Self {
        Self {
            date,
            timeslot,
            patient: patient.into(),
            provider: Provider::Doctor(doctor),
            kind: AppointmentKind::Office,
        }
    }

    /// An imaging visit with a technician in a given room type.
    pub fn imaging(
        date: CalendarDate,
        timeslot: Timeslot,
        patient: impl Into<Patient>,
        technician: Technician,
        room: Radiology,
    ) -> Self {
        Self {
            date,
            timeslot,
            patient: patient.into(),
            provider: Provider::Technician(technician),
            kind: AppointmentKind::Imaging { room },
        }
    }

    #[inline]
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    #[inline]
    pub fn timeslot(&self) -> Timeslot {
        self.timeslot
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    pub fn kind(&self) -> AppointmentKind {
        self.kind
    }

    pub fn is_imaging(&self) -> bool {
        matches!(self.kind, AppointmentKind::Imaging { .. })
    }

    /// Imaging room, if this is an imaging visit.
    pub fn room(&self) -> Option<Radiology> {
        match self.kind {
            AppointmentKind::Imaging { room } => Some(room),
            AppointmentKind::Office => None,
        }
    }

    /// Whether this appointment occupies `(date, timeslot)`.
    #[inline]
    pub fn same_slot(&self, date: CalendarDate, timeslot: Timeslot) -> bool {
        self.date == date && self.timeslot == timeslot
    }

    /// Whether this appointment belongs to the patient with `patient`'s profile.
    pub fn is_for(&self, patient: &impl Person) -> bool {
        self.patient.profile() == patient.profile()
    }

    /// A copy moved to another slot on the same day, keeping provider and kind.
    pub fn with_timeslot(&self, timeslot: Timeslot) -> Self {
        Self {
            timeslot,
            ..self.clone()
        }
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.timeslot, self.patient, self.provider
        )?;
        if let AppointmentKind::Imaging { room } = self.kind {
            write!(f, "[{}]", room.name())?;
        }
        Ok(())
    }
}
