//! Clinic scheduling: booking workflow, technician rotation, billing.
//!
//! Ties the roster, appointment book, and admission rules into one
//! scheduling context.
//!
//! # Components
//!
//! | Type | Role |
//! |------|------|
//! | `ClinicScheduler` | Owns roster, book, rotation, policy; books, cancels, reschedules |
//! | `TechnicianRotation` | Round-robin technician choice for imaging requests |
//! | `BookingPolicy` | Calendar rules (booking horizon, weekends, date of birth) |
//! | `patient_statements` / `provider_credits` | Billing aggregates over the book |
//!
//! # Request Flow
//!
//! Requests are validated before anything changes; a rejected request
//! leaves the book and the rotation cursor as they were.

mod billing;
mod clinic;
mod policy;
mod rotation;

pub use billing::{patient_statements, provider_credits, PatientStatement, ProviderCredit};
pub use clinic::{ClinicScheduler, ImagingRequest, OfficeRequest};
pub use policy::{BookingPolicy, DEFAULT_HORIZON_MONTHS};
pub use rotation::TechnicianRotation;
