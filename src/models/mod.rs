//! Domain models for the TravelCare platform.

pub mod appointment;
pub mod clinic;
pub mod user;

pub use appointment::{Appointment, AppointmentStatus, TIME_SLOTS};
pub use clinic::{Clinic, ClinicType, Review};
pub use user::{Role, User};
