//! Ordering rules and sort engine for appointment reports.
//!
//! Each report view orders the appointment book by a chain of comparison
//! rules: a primary rule, then tie-breakers consulted only when every
//! earlier rule ties.
//!
//! # Report Orders
//!
//! | Key | Chain |
//! |-----|-------|
//! | `DateTimeProvider` | date/slot → provider profile |
//! | `PatientDateTime` | patient profile → date/slot |
//! | `CountyDateTime` | provider county → date/slot → patient profile |
//! | `ProviderProfile` | provider profile |
//!
//! # Usage
//!
//! ```
//! use clinic_schedule::sorting::{rules, SortEngine};
//!
//! let engine = SortEngine::new()
//!     .with_rule(rules::County)
//!     .with_tie_breaker(rules::DateTime);
//! // engine.sort(&mut appointments);
//! ```
//!
//! Sorting is stable, so appointments equal under the whole chain keep
//! their relative order.

mod engine;
pub mod rules;

pub use engine::SortEngine;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::Appointment;

/// A single comparison criterion over appointments.
pub trait OrderingRule: Send + Sync + Debug {
    /// Rule name (e.g., "COUNTY").
    fn name(&self) -> &'static str;

    /// Compares two appointments; `Less` sorts first.
    fn compare(&self, a: &Appointment, b: &Appointment) -> Ordering;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// The report orders the clinic produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Date and slot, then provider profile.
    DateTimeProvider,
    /// Patient profile, then date and slot.
    PatientDateTime,
    /// Provider county, then date and slot, then patient profile.
    CountyDateTime,
    /// Provider profile only (credit and roster views).
    ProviderProfile,
}

impl SortKey {
    /// The rule chain for this key.
    pub fn engine(&self) -> SortEngine {
        match self {
            SortKey::DateTimeProvider => SortEngine::new()
                .with_rule(rules::DateTime)
                .with_tie_breaker(rules::ProviderProfile),
            SortKey::PatientDateTime => SortEngine::new()
                .with_rule(rules::PatientProfile)
                .with_tie_breaker(rules::DateTime),
            SortKey::CountyDateTime => SortEngine::new()
                .with_rule(rules::County)
                .with_tie_breaker(rules::DateTime)
                .with_tie_breaker(rules::PatientProfile),
            SortKey::ProviderProfile => SortEngine::new().with_rule(rules::ProviderProfile),
        }
    }
}

/// Sorts `appointments` in place by `key`.
pub fn sort_appointments(appointments: &mut [Appointment], key: SortKey) {
    key.engine().sort(appointments);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CalendarDate, Doctor, Location, Person, Profile, Radiology, Specialty, Technician,
        Timeslot,
    };

    fn date(m: u32, d: u32, y: i32) -> CalendarDate {
        CalendarDate::new(m, d, y).unwrap()
    }

    fn slot(code: u8) -> Timeslot {
        Timeslot::from_code(code).unwrap()
    }

    fn doctor(last: &str, location: Location, npi: &str) -> Doctor {
        Doctor::new(
            Profile::new("Dr", last, date(1, 1, 1970)),
            location,
            Specialty::Family,
            npi,
        )
    }

    fn patient(first: &str, last: &str) -> Profile {
        Profile::new(first, last, date(1, 1, 1990))
    }

    #[test]
    fn test_patient_then_date_time() {
        let john = patient("John", "Doe");
        let mut list = vec![
            Appointment::office(date(1, 1, 2024), slot(2), john.clone(), doctor("Patel", Location::Bridgewater, "01")),
            Appointment::office(date(1, 1, 2024), slot(1), john, doctor("Lim", Location::Clark, "02")),
        ];
        sort_appointments(&mut list, SortKey::PatientDateTime);
        assert_eq!(list[0].timeslot().code(), 1);
        assert_eq!(list[1].timeslot().code(), 2);
    }

    #[test]
    fn test_date_time_then_provider() {
        let mut list = vec![
            Appointment::office(date(1, 2, 2024), slot(1), patient("A", "A"), doctor("Adams", Location::Edison, "01")),
            Appointment::office(date(1, 1, 2024), slot(3), patient("B", "B"), doctor("Young", Location::Edison, "02")),
            Appointment::office(date(1, 1, 2024), slot(3), patient("C", "C"), doctor("Brown", Location::Edison, "03")),
        ];
        sort_appointments(&mut list, SortKey::DateTimeProvider);
        let lasts: Vec<&str> = list.iter().map(|a| a.provider().profile().last_name()).collect();
        assert_eq!(lasts, vec!["Brown", "Young", "Adams"]);
    }

    #[test]
    fn test_county_groups_contiguously() {
        let tech = Technician::new(patient("Gary", "Chen"), Location::Piscataway, 100);
        let mut list = vec![
            Appointment::office(date(1, 3, 2024), slot(1), patient("A", "Zed"), doctor("P", Location::Clark, "01")),
            Appointment::office(date(1, 2, 2024), slot(1), patient("B", "Yu"), doctor("Q", Location::Edison, "02")),
            Appointment::office(date(1, 1, 2024), slot(1), patient("C", "Xi"), doctor("R", Location::Princeton, "03")),
            Appointment::imaging(date(1, 1, 2024), slot(4), patient("D", "Wu"), tech, Radiology::Xray),
            Appointment::office(date(1, 1, 2024), slot(2), patient("E", "Vo"), doctor("S", Location::Bridgewater, "04")),
        ];
        sort_appointments(&mut list, SortKey::CountyDateTime);
        let counties: Vec<&str> = list.iter().map(|a| a.provider().location().county()).collect();
        assert_eq!(counties, vec!["Mercer", "Middlesex", "Middlesex", "Somerset", "Union"]);
        // within Middlesex: 1/1 slot 4 before 1/2 slot 1
        assert!(list[1].is_imaging());
        assert_eq!(list[2].date(), date(1, 2, 2024));
    }

    #[test]
    fn test_county_final_tie_break_by_patient() {
        let mut list = vec![
            Appointment::office(date(1, 1, 2024), slot(1), patient("Amy", "Smith"), doctor("P", Location::Edison, "01")),
            Appointment::office(date(1, 1, 2024), slot(1), patient("Bob", "Jones"), doctor("Q", Location::Piscataway, "02")),
        ];
        sort_appointments(&mut list, SortKey::CountyDateTime);
        assert_eq!(list[0].patient().profile().last_name(), "Jones");
    }

    #[test]
    fn test_provider_profile_only() {
        let mut list = vec![
            Appointment::office(date(1, 1, 2024), slot(1), patient("A", "A"), doctor("Young", Location::Edison, "01")),
            Appointment::office(date(1, 5, 2024), slot(1), patient("B", "B"), doctor("Adams", Location::Edison, "02")),
        ];
        sort_appointments(&mut list, SortKey::ProviderProfile);
        assert_eq!(list[0].provider().profile().last_name(), "Adams");
    }
}
