//! Built-in ordering rules.
//!
//! # Categories
//!
//! - **Time**: DATE_TIME
//! - **Identity**: PATIENT, PROVIDER
//! - **Place**: COUNTY
//!
//! Profiles order by (last name, first name, date of birth), with names
//! compared case-insensitively so the order agrees with profile equality.
//! A mixed-case roster therefore sorts `adams` before `Baker`, where a
//! plain byte comparison would put `Baker` first.

use std::cmp::Ordering;

use super::OrderingRule;
use crate::models::{Appointment, Person};

/// Appointment date, then slot.
#[derive(Debug, Clone, Copy)]
pub struct DateTime;

impl OrderingRule for DateTime {
    fn name(&self) -> &'static str {
        "DATE_TIME"
    }

    fn compare(&self, a: &Appointment, b: &Appointment) -> Ordering {
        a.date()
            .cmp(&b.date())
            .then_with(|| a.timeslot().cmp(&b.timeslot()))
    }

    fn description(&self) -> &'static str {
        "Appointment date and time"
    }
}

/// Patient profile, names compared case-insensitively.
#[derive(Debug, Clone, Copy)]
pub struct PatientProfile;

impl OrderingRule for PatientProfile {
    fn name(&self) -> &'static str {
        "PATIENT"
    }

    fn compare(&self, a: &Appointment, b: &Appointment) -> Ordering {
        a.patient().profile().cmp(b.patient().profile())
    }

    fn description(&self) -> &'static str {
        "Patient last name, first name, date of birth"
    }
}

/// Provider profile, names compared case-insensitively.
#[derive(Debug, Clone, Copy)]
pub struct ProviderProfile;

impl OrderingRule for ProviderProfile {
    fn name(&self) -> &'static str {
        "PROVIDER"
    }

    fn compare(&self, a: &Appointment, b: &Appointment) -> Ordering {
        a.provider().profile().cmp(b.provider().profile())
    }

    fn description(&self) -> &'static str {
        "Provider last name, first name, date of birth"
    }
}

/// County of the provider's practice location, lexicographic.
#[derive(Debug, Clone, Copy)]
pub struct County;

impl OrderingRule for County {
    fn name(&self) -> &'static str {
        "COUNTY"
    }

    fn compare(&self, a: &Appointment, b: &Appointment) -> Ordering {
        a.provider()
            .location()
            .county()
            .cmp(b.provider().location().county())
    }

    fn description(&self) -> &'static str {
        "Provider county name"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalendarDate, Doctor, Location, Profile, Specialty, Timeslot};

    fn appt(day: u32, code: u8, patient: &str, provider: &str, location: Location) -> Appointment {
        let dob = CalendarDate::new(1, 1, 1990).unwrap();
        Appointment::office(
            CalendarDate::new(6, day, 2025).unwrap(),
            Timeslot::from_code(code).unwrap(),
            Profile::new("Pat", patient, dob),
            Doctor::new(Profile::new("Dr", provider, dob), location, Specialty::Family, "01"),
        )
    }

    #[test]
    fn test_date_time() {
        let early = appt(2, 12, "A", "A", Location::Edison);
        let late = appt(3, 1, "A", "A", Location::Edison);
        let same_slot = appt(2, 12, "B", "B", Location::Clark);
        assert_eq!(DateTime.compare(&early, &late), Ordering::Less); // date first
        assert_eq!(DateTime.compare(&early, &same_slot), Ordering::Equal);
        assert_eq!(
            DateTime.compare(&appt(2, 2, "A", "A", Location::Edison), &early),
            Ordering::Less
        );
    }

    #[test]
    fn test_patient_profile() {
        let a = appt(1, 1, "Adams", "X", Location::Edison);
        let b = appt(1, 1, "Baker", "X", Location::Edison);
        assert_eq!(PatientProfile.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_provider_profile() {
        let a = appt(1, 1, "X", "Young", Location::Edison);
        let b = appt(1, 1, "X", "Adams", Location::Edison);
        assert_eq!(ProviderProfile.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_profile_rules_ignore_case() {
        let lower = appt(1, 1, "adams", "young", Location::Edison);
        let upper = appt(1, 1, "Baker", "Adams", Location::Edison);
        assert_eq!(PatientProfile.compare(&lower, &upper), Ordering::Less);
        assert_eq!(ProviderProfile.compare(&lower, &upper), Ordering::Greater);

        let shouted = appt(1, 1, "ADAMS", "YOUNG", Location::Edison);
        assert_eq!(PatientProfile.compare(&lower, &shouted), Ordering::Equal);
        assert_eq!(ProviderProfile.compare(&lower, &shouted), Ordering::Equal);
    }

    #[test]
    fn test_county() {
        let union = appt(1, 1, "X", "X", Location::Clark);
        let mercer = appt(1, 1, "X", "X", Location::Princeton);
        let edison = appt(1, 1, "X", "X", Location::Edison);
        let piscataway = appt(1, 1, "X", "X", Location::Piscataway);
        assert_eq!(County.compare(&mercer, &union), Ordering::Less);
        assert_eq!(County.compare(&edison, &piscataway), Ordering::Equal);
    }
}
