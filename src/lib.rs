//! Appointment scheduling engine for a multi-location clinic.
//!
//! Books office visits with doctors and imaging visits with technicians,
//! rejecting requests that would double-book a provider or a patient, and
//! produces ordered reports and billing aggregates over the booked set.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `CalendarDate`, `Timeslot`, `Profile`,
//!   `Provider`, `Appointment`, `AppointmentBook`
//! - **`validation`**: Admission rules (duplicate, provider and patient
//!   double-booking)
//! - **`scheduler`**: `ClinicScheduler` context, technician rotation,
//!   booking policy, billing
//! - **`sorting`**: Multi-key ordering rules for reports
//! - **`roster`**: Provider roster loading
//! - **`error`**: Error types
//!
//! # Example
//!
//! ```
//! use clinic_schedule::models::{CalendarDate, Profile, Radiology, Timeslot};
//! use clinic_schedule::roster::Roster;
//! use clinic_schedule::scheduler::{BookingPolicy, ClinicScheduler, ImagingRequest};
//!
//! let roster = Roster::parse("T  GARY  CHEN  9/12/1980  EDISON  125").unwrap();
//! let mut clinic = ClinicScheduler::new(roster).with_policy(BookingPolicy::unrestricted());
//!
//! let patient = Profile::new("Jane", "Roe", CalendarDate::new(5, 1, 1996).unwrap());
//! let request = ImagingRequest::new(
//!     CalendarDate::new(11, 4, 2024).unwrap(),
//!     Timeslot::from_code(7).unwrap(),
//!     patient,
//!     Radiology::Xray,
//! );
//! let booked = clinic.book_imaging(request).unwrap();
//! assert_eq!(booked.room(), Some(Radiology::Xray));
//! ```

pub mod error;
pub mod models;
pub mod roster;
pub mod scheduler;
pub mod sorting;
pub mod validation;
