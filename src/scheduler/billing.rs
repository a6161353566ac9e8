//! Billing aggregates over the appointment book.
//!
//! # Metrics
//!
//! | Aggregate | Definition |
//! |-----------|-----------|
//! | Amount due | Sum of provider rates over a patient's appointments |
//! | Credit | Sum of a provider's rate over their appointments |
//!
//! Amounts are whole dollars and saturate at `u32::MAX`. Rendering (currency formatting, numbering)
//! is left to callers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{AppointmentBook, Person, Profile, Provider};
use crate::sorting::SortKey;

/// What one patient owes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientStatement {
    pub patient: Profile,
    /// Number of appointments billed.
    pub visits: usize,
    /// Total due (whole dollars).
    pub amount_due: u32,
}

/// What one provider is owed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCredit {
    pub provider: Provider,
    pub visits: usize,
    /// Total credit (whole dollars).
    pub credit: u32,
}

/// Per-patient amounts due, ordered by patient profile.
pub fn patient_statements(book: &AppointmentBook) -> Vec<PatientStatement> {
    let mut ordered: Vec<_> = book.iter().cloned().collect();
    SortKey::PatientDateTime.engine().sort(&mut ordered);

    let mut statements: Vec<PatientStatement> = Vec::new();
    let mut index: HashMap<Profile, usize> = HashMap::new();
    for appointment in &ordered {
        let profile = appointment.patient().profile();
        let rate = appointment.provider().rate();
        match index.get(profile) {
            Some(&i) => {
                statements[i].visits += 1;
                statements[i].amount_due = statements[i].amount_due.saturating_add(rate);
            }
            None => {
                index.insert(profile.clone(), statements.len());
                statements.push(PatientStatement {
                    patient: profile.clone(),
                    visits: 1,
                    amount_due: rate,
                });
            }
        }
    }
    statements
}

/// Per-provider credits, ordered by provider profile.
pub fn provider_credits(book: &AppointmentBook) -> Vec<ProviderCredit> {
    let mut ordered: Vec<_> = book.iter().cloned().collect();
    SortKey::ProviderProfile.engine().sort(&mut ordered);

    let mut credits: Vec<ProviderCredit> = Vec::new();
    let mut index: HashMap<Provider, usize> = HashMap::new();
    for appointment in &ordered {
        let provider = appointment.provider();
        let rate = provider.rate();
        match index.get(provider) {
            Some(&i) => {
                credits[i].visits += 1;
                credits[i].credit = credits[i].credit.saturating_add(rate);
            }
            None => {
                index.insert(provider.clone(), credits.len());
                credits.push(ProviderCredit {
                    provider: provider.clone(),
                    visits: 1,
                    credit: rate,
                });
            }
        }
    }
    credits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Appointment, CalendarDate, Doctor, Location, Radiology, Specialty, Technician, Timeslot,
    };

    fn date(m: u32, d: u32, y: i32) -> CalendarDate {
        CalendarDate::new(m, d, y).unwrap()
    }

    fn slot(code: u8) -> Timeslot {
        Timeslot::from_code(code).unwrap()
    }

    fn sample_book() -> AppointmentBook {
        let dob = date(1, 1, 1990);
        let zed = Profile::new("Al", "Zed", dob);
        let abe = Profile::new("Bo", "Abe", dob);
        let patel = Doctor::new(
            Profile::new("Andrew", "Patel", date(3, 1, 1973)),
            Location::Bridgewater,
            Specialty::Allergist,
            "01",
        );
        let chen = Technician::new(
            Profile::new("Gary", "Chen", date(9, 12, 1980)),
            Location::Edison,
            125,
        );

        let mut book = AppointmentBook::new();
        book.insert(Appointment::office(date(11, 4, 2024), slot(1), zed.clone(), patel.clone()));
        book.insert(Appointment::imaging(date(11, 4, 2024), slot(2), zed, chen.clone(), Radiology::Xray));
        book.insert(Appointment::office(date(11, 5, 2024), slot(1), abe.clone(), patel));
        book.insert(Appointment::imaging(date(11, 6, 2024), slot(2), abe, chen, Radiology::Catscan));
        book
    }

    #[test]
    fn test_patient_statements() {
        let statements = patient_statements(&sample_book());
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].patient.last_name(), "Abe");
        assert_eq!(statements[0].amount_due, 350 + 125);
        assert_eq!(statements[0].visits, 2);
        assert_eq!(statements[1].patient.last_name(), "Zed");
        assert_eq!(statements[1].amount_due, 475);
    }

    #[test]
    fn test_provider_credits() {
        let credits = provider_credits(&sample_book());
        assert_eq!(credits.len(), 2);
        assert_eq!(credits[0].provider.profile().last_name(), "Chen");
        assert_eq!(credits[0].credit, 250);
        assert_eq!(credits[1].provider.profile().last_name(), "Patel");
        assert_eq!(credits[1].credit, 700);
        assert_eq!(credits[1].visits, 2);
    }

    #[test]
    fn test_book_order_untouched() {
        let book = sample_book();
        let before: Vec<_> = book.iter().cloned().collect();
        patient_statements(&book);
        provider_credits(&book);
        assert_eq!(book.as_slice(), before.as_slice());
    }

    #[test]
    fn test_totals_saturate() {
        let costly = Technician::new(
            Profile::new("Rich", "Rate", date(1, 1, 1970)),
            Location::Clark,
            u32::MAX,
        );
        let patient = Profile::new("Al", "Zed", date(1, 1, 1990));
        let mut book = AppointmentBook::new();
        for code in 1..=2 {
            book.insert(Appointment::imaging(
                date(11, 4, 2024),
                slot(code),
                patient.clone(),
                costly.clone(),
                Radiology::Ultrasound,
            ));
        }

        let statements = patient_statements(&book);
        assert_eq!(statements[0].visits, 2);
        assert_eq!(statements[0].amount_due, u32::MAX);
        assert_eq!(provider_credits(&book)[0].credit, u32::MAX);
    }

    #[test]
    fn test_empty_book() {
        let book = AppointmentBook::new();
        assert!(patient_statements(&book).is_empty());
        assert!(provider_credits(&book).is_empty());
    }
}
