//! Booking policy: calendar rules applied before a request reaches the
//! conflict checks.
//!
//! # Rules
//! - Appointment date must be after today.
//! - Appointment date must be no later than today + `horizon_months`.
//! - Appointment date must not fall on a weekend unless `allow_weekends`.
//! - Patient date of birth must be before today.
//!
//! Setting `enforce_date_window` to `false` skips the three appointment
//! date rules (bulk imports, replaying historic data).

use serde::{Deserialize, Serialize};

use crate::error::BookingError;
use crate::models::CalendarDate;

/// Default booking horizon.
pub const DEFAULT_HORIZON_MONTHS: u32 = 6;

/// Calendar constraints on booking requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingPolicy {
    /// How many months ahead appointments may be booked.
    pub horizon_months: u32,
    /// Whether Saturday/Sunday appointments are accepted.
    pub allow_weekends: bool,
    /// Whether the today/horizon/weekend rules apply at all.
    pub enforce_date_window: bool,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            allow_weekends: false,
            enforce_date_window: true,
        }
    }
}

impl BookingPolicy {
    /// A policy with no appointment date restrictions.
    pub fn unrestricted() -> Self {
        Self {
            allow_weekends: true,
            enforce_date_window: false,
            ..Self::default()
        }
    }

    /// Sets the booking horizon.
    pub fn with_horizon_months(mut self, months: u32) -> Self {
        self.horizon_months = months;
        self
    }

    /// Allows or forbids weekend appointments.
    pub fn with_weekends(mut self, allow: bool) -> Self {
        self.allow_weekends = allow;
        self
    }

    /// Turns the appointment date rules on or off.
    pub fn with_date_window(mut self, enforce: bool) -> Self {
        self.enforce_date_window = enforce;
        self
    }

    /// Checks an appointment date against today.
    pub fn check_appointment_date(
        &self,
        date: CalendarDate,
        today: CalendarDate,
    ) -> Result<(), BookingError> {
        if !self.enforce_date_window {
            return Ok(());
        }
        let reject = |reason: String| {
            Err(BookingError::AppointmentDate { date, reason })
        };

        if date <= today {
            return reject("is today or a date before today.".to_string());
        }
        // An unrepresentable horizon end means the horizon is effectively unbounded.
        if let Some(limit) = today.add_months(self.horizon_months) {
            if date > limit {
                return reject(format!(
                    "is not within {} months.",
                    self.horizon_months
                ));
            }
        }
        if !self.allow_weekends && date.is_weekend() {
            return reject("is Saturday or Sunday.".to_string());
        }
        Ok(())
    }

    /// Checks a patient's date of birth against today.
    pub fn check_date_of_birth(
        &self,
        date_of_birth: CalendarDate,
        today: CalendarDate,
    ) -> Result<(), BookingError> {
        if date_of_birth >= today {
            return Err(BookingError::DateOfBirth {
                date: date_of_birth,
                reason: "is today or a date after today.".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32, y: i32) -> CalendarDate {
        CalendarDate::new(m, d, y).unwrap()
    }

    // Friday
    fn today() -> CalendarDate {
        date(11, 1, 2024)
    }

    #[test]
    fn test_default_policy() {
        let p = BookingPolicy::default();
        assert_eq!(p.horizon_months, 6);
        assert!(!p.allow_weekends);
        assert!(p.enforce_date_window);
    }

    #[test]
    fn test_past_and_today_rejected() {
        let p = BookingPolicy::default();
        let err = p.check_appointment_date(today(), today()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Appointment date: 11/1/2024 is today or a date before today."
        );
        assert!(p.check_appointment_date(date(10, 31, 2024), today()).is_err());
    }

    #[test]
    fn test_horizon() {
        let p = BookingPolicy::default();
        // 5/1/2025 is a Thursday, exactly six months out
        assert!(p.check_appointment_date(date(5, 1, 2025), today()).is_ok());
        let err = p.check_appointment_date(date(5, 2, 2025), today()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Appointment date: 5/2/2025 is not within 6 months."
        );

        let short = BookingPolicy::default().with_horizon_months(1);
        assert!(short.check_appointment_date(date(12, 5, 2024), today()).is_err());
    }

    #[test]
    fn test_weekends() {
        let p = BookingPolicy::default();
        let saturday = date(11, 2, 2024);
        let err = p.check_appointment_date(saturday, today()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Appointment date: 11/2/2024 is Saturday or Sunday."
        );
        assert!(p
            .with_weekends(true)
            .check_appointment_date(saturday, today())
            .is_ok());
    }

    #[test]
    fn test_unrestricted() {
        let p = BookingPolicy::unrestricted();
        assert!(p.check_appointment_date(date(1, 1, 2000), today()).is_ok());
    }

    #[test]
    fn test_date_of_birth() {
        let p = BookingPolicy::default();
        assert!(p.check_date_of_birth(date(12, 13, 1989), today()).is_ok());
        let err = p.check_date_of_birth(today(), today()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Patient dob: 11/1/2024 is today or a date after today."
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let p: BookingPolicy = serde_json::from_str(r#"{"horizon_months": 3}"#).unwrap();
        assert_eq!(p.horizon_months, 3);
        assert!(p.enforce_date_window);
        assert!(!p.allow_weekends);
    }
}
