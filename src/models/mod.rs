//! Clinic scheduling domain models.
//!
//! Value types for dates, slots, people, providers, and appointments, plus
//! the appointment book that holds the current bookings.
//!
//! # Domain Mappings
//!
//! | Model | Role |
//! |-------|------|
//! | `CalendarDate` | Appointment day, date of birth |
//! | `Timeslot` | One of twelve half-hour slots |
//! | `Profile` | Identity key for patients and providers |
//! | `Provider` | Doctor (office) or Technician (imaging) |
//! | `Appointment` | Office or imaging booking |
//! | `AppointmentBook` | Current set of bookings |

mod appointment;
mod book;
mod calendar;
mod profile;
mod provider;
mod timeslot;

pub use appointment::{Appointment, AppointmentKind, Radiology};
pub use book::{AppointmentBook, ReportFilter};
pub use calendar::{days_in_month, is_leap_year, CalendarDate};
pub use profile::{Patient, Person, Profile};
pub use provider::{Doctor, Location, Provider, Specialty, Technician};
pub use timeslot::{Timeslot, MAX_SLOT_CODE, MIN_SLOT_CODE};
