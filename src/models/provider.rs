//! Provider model.
//!
//! Providers are the people appointments are booked with: salaried
//! doctors who see office visits and per-visit technicians who run
//! imaging rooms. Each practices at one of the clinic's fixed locations.
//!
//! # Billing
//! [`Provider::rate`] is the amount charged per appointment: a doctor's
//! rate comes from their [`Specialty`], a technician's is stored per
//! person.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::profile::{Person, Profile};
use crate::error::ModelError;

/// Clinic sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Location {
    Bridgewater,
    Edison,
    Piscataway,
    Princeton,
    Morristown,
    Clark,
}

impl Location {
    /// Every location, in declaration order.
    pub const ALL: [Location; 6] = [
        Location::Bridgewater,
        Location::Edison,
        Location::Piscataway,
        Location::Princeton,
        Location::Morristown,
        Location::Clark,
    ];

    /// Upper-case site name.
    pub fn name(&self) -> &'static str {
        match self {
            Location::Bridgewater => "BRIDGEWATER",
            Location::Edison => "EDISON",
            Location::Piscataway => "PISCATAWAY",
            Location::Princeton => "PRINCETON",
            Location::Morristown => "MORRISTOWN",
            Location::Clark => "CLARK",
        }
    }

    pub fn county(&self) -> &'static str {
        match self {
            Location::Bridgewater => "Somerset",
            Location::Edison | Location::Piscataway => "Middlesex",
            Location::Princeton => "Mercer",
            Location::Morristown => "Morris",
            Location::Clark => "Union",
        }
    }

    pub fn zip(&self) -> &'static str {
        match self {
            Location::Bridgewater => "08807",
            Location::Edison => "08817",
            Location::Piscataway => "08854",
            Location::Princeton => "08542",
            Location::Morristown => "07960",
            Location::Clark => "07066",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} {}", self.name(), self.county(), self.zip())
    }
}

impl FromStr for Location {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ModelError::UnknownLocation(s.to_string()))
    }
}

/// Doctor specialties with their fixed per-visit charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Specialty {
    Family,
    Pediatrician,
    Allergist,
}

impl Specialty {
    pub const ALL: [Specialty; 3] = [
        Specialty::Family,
        Specialty::Pediatrician,
        Specialty::Allergist,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Specialty::Family => "FAMILY",
            Specialty::Pediatrician => "PEDIATRICIAN",
            Specialty::Allergist => "ALLERGIST",
        }
    }

    /// Charge per visit (whole dollars).
    pub fn charge(&self) -> u32 {
        match self {
            Specialty::Family => 250,
            Specialty::Pediatrician => 300,
            Specialty::Allergist => 350,
        }
    }
}

impl FromStr for Specialty {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|sp| sp.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ModelError::UnknownSpecialty(s.to_string()))
    }
}

/// A doctor, identified for booking by a unique NPI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Doctor {
    profile: Profile,
    location: Location,
    specialty: Specialty,
    npi: String,
}

impl Doctor {
    pub fn new(
        profile: Profile,
        location: Location,
        specialty: Specialty,
        npi: impl Into<String>,
    ) -> Self {
        Self {
            profile,
            location,
            specialty,
            npi: npi.into(),
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn specialty(&self) -> Specialty {
        self.specialty
    }

    /// National Provider Identifier.
    pub fn npi(&self) -> &str {
        &self.npi
    }

    pub fn rate(&self) -> u32 {
        self.specialty.charge()
    }
}

impl Person for Doctor {
    fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}][{}, #{}]",
            self.profile,
            self.location,
            self.specialty.name(),
            self.npi
        )
    }
}

/// An imaging technician paid per visit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Technician {
    profile: Profile,
    location: Location,
    rate_per_visit: u32,
}

impl Technician {
    pub fn new(profile: Profile, location: Location, rate_per_visit: u32) -> Self {
        Self {
            profile,
            location,
            rate_per_visit,
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn rate(&self) -> u32 {
        self.rate_per_visit
    }
}

impl Person for Technician {
    fn profile(&self) -> &Profile {
        &self.profile
    }
}

impl fmt::Display for Technician {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}][rate: ${}.00]",
            self.profile, self.location, self.rate_per_visit
        )
    }
}

/// Either kind of provider.
///
/// Two providers are equal when they are the same kind with equal
/// profiles and attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    Doctor(Doctor),
    Technician(Technician),
}

impl Provider {
    /// Charge per appointment (whole dollars).
    pub fn rate(&self) -> u32 {
        match self {
            Provider::Doctor(d) => d.rate(),
            Provider::Technician(t) => t.rate(),
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Provider::Doctor(d) => d.location(),
            Provider::Technician(t) => t.location(),
        }
    }

    /// NPI for doctors; technicians have none.
    pub fn npi(&self) -> Option<&str> {
        match self {
            Provider::Doctor(d) => Some(d.npi()),
            Provider::Technician(_) => None,
        }
    }

    pub fn as_doctor(&self) -> Option<&Doctor> {
        match self {
            Provider::Doctor(d) => Some(d),
            Provider::Technician(_) => None,
        }
    }

    pub fn as_technician(&self) -> Option<&Technician> {
        match self {
            Provider::Technician(t) => Some(t),
            Provider::Doctor(_) => None,
        }
    }

    pub fn is_technician(&self) -> bool {
        matches!(self, Provider::Technician(_))
    }
}

impl Person for Provider {
    fn profile(&self) -> &Profile {
        match self {
            Provider::Doctor(d) => d.profile(),
            Provider::Technician(t) => t.profile(),
        }
    }
}

impl From<Doctor> for Provider {
    fn from(doctor: Doctor) -> Self {
        Provider::Doctor(doctor)
    }
}

impl From<Technician> for Provider {
    fn from(technician: Technician) -> Self {
        Provider::Technician(technician)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Doctor(d) => fmt::Display::fmt(d, f),
            Provider::Technician(t) => fmt::Display::fmt(t, f),
        }
    }
}
