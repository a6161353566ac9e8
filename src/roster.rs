//! Provider roster.
//!
//! Holds the doctors and technicians the clinic schedules against and
//! seeds the technician rotation.
//!
//! # Text Format
//! One provider per line, fields separated by whitespace:
//!
//! ```text
//! D  ANDREW  PATEL  1/21/1989  BRIDGEWATER  FAMILY  01
//! T  GARY    CHEN   9/12/1980  EDISON       125
//! ```
//!
//! `D` lines are doctors (location, specialty, NPI); `T` lines are
//! technicians (location, per-visit rate). Blank lines are ignored.
//!
//! # Rotation Order
//! The rotation runs technicians in reverse load order: the last
//! technician listed is first up.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::error::{ModelError, RosterError};
use crate::models::{CalendarDate, Doctor, Location, Person, Profile, Provider, Specialty, Technician};
use crate::scheduler::TechnicianRotation;

const DOCTOR_FIELDS: usize = 7;
const TECHNICIAN_FIELDS: usize = 6;

/// The loaded set of providers.
///
/// Deserialization goes through [`Roster::from_providers`], so a stored
/// roster with a repeated NPI is refused.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "StoredRoster")]
pub struct Roster {
    providers: Vec<Provider>,
}

#[derive(Deserialize)]
struct StoredRoster {
    providers: Vec<Provider>,
}

impl TryFrom<StoredRoster> for Roster {
    type Error = RosterError;

    fn try_from(stored: StoredRoster) -> Result<Self, Self::Error> {
        Self::from_providers(stored.providers)
    }
}

impl Roster {
    /// Builds a roster from already-constructed providers, in load order.
    pub fn from_providers(
        providers: impl IntoIterator<Item = Provider>,
    ) -> Result<Self, RosterError> {
        let mut roster = Self::default();
        for (i, provider) in providers.into_iter().enumerate() {
            roster.push(provider, i + 1)?;
        }
        Ok(roster)
    }

    /// Parses roster text (see module docs for the format).
    pub fn parse(text: &str) -> Result<Self, RosterError> {
        let mut roster = Self::default();
        for (i, line) in text.lines().enumerate() {
            let line_no = i + 1;
            if line.trim().is_empty() {
                continue;
            }
            let provider = parse_line(line, line_no)?;
            roster.push(provider, line_no)?;
        }
        info!(
            "Loaded {} providers ({} technicians)",
            roster.len(),
            roster.technicians().count()
        );
        Ok(roster)
    }

    fn push(&mut self, provider: Provider, line: usize) -> Result<(), RosterError> {
        if let Some(npi) = provider.npi() {
            if self.doctor_by_npi(npi).is_some() {
                return Err(RosterError::DuplicateNpi {
                    line,
                    npi: npi.to_string(),
                });
            }
        }
        debug!("Roster entry {}: {}", line, provider);
        self.providers.push(provider);
        Ok(())
    }

    /// Number of providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Providers in load order.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Providers ordered by profile (last, first, date of birth).
    pub fn providers_sorted(&self) -> Vec<&Provider> {
        let mut sorted: Vec<&Provider> = self.providers.iter().collect();
        sorted.sort_by(|a, b| a.profile().cmp(b.profile()));
        sorted
    }

    /// Looks up a doctor by NPI.
    pub fn doctor_by_npi(&self, npi: &str) -> Option<&Doctor> {
        self.doctors().find(|d| d.npi() == npi)
    }

    pub fn doctors(&self) -> impl Iterator<Item = &Doctor> {
        self.providers.iter().filter_map(Provider::as_doctor)
    }

    /// Technicians in load order.
    pub fn technicians(&self) -> impl Iterator<Item = &Technician> {
        self.providers.iter().filter_map(Provider::as_technician)
    }

    /// A fresh rotation over this roster's technicians, last-loaded first.
    pub fn rotation(&self) -> TechnicianRotation {
        let mut techs: Vec<Technician> = self.technicians().cloned().collect();
        techs.reverse();
        // Rotation identity is the profile; keep the first occurrence.
        let mut seen = HashSet::new();
        techs.retain(|t| seen.insert(t.profile().clone()));
        TechnicianRotation::new(techs)
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<Provider, RosterError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let field_err = |source: ModelError| RosterError::Field {
        line: line_no,
        source,
    };
    let malformed = |reason: String| RosterError::Malformed {
        line: line_no,
        reason,
    };

    let expected = match fields[0] {
        "D" => DOCTOR_FIELDS,
        "T" => TECHNICIAN_FIELDS,
        tag => return Err(malformed(format!("unknown record type {tag:?}"))),
    };
    if fields.len() != expected {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            expected,
            fields.len()
        )));
    }

    let dob: CalendarDate = fields[3].parse().map_err(field_err)?;
    let profile = Profile::new(fields[1], fields[2], dob);
    let location: Location = fields[4].parse().map_err(field_err)?;

    if fields[0] == "D" {
        let specialty: Specialty = fields[5].parse().map_err(field_err)?;
        Ok(Doctor::new(profile, location, specialty, fields[6]).into())
    } else {
        let rate: u32 = fields[5]
            .parse()
            .map_err(|_| malformed(format!("invalid rate {:?}", fields[5])))?;
        Ok(Technician::new(profile, location, rate).into())
    }
}
