//! External collaborators consumed by the booking platform.

pub mod ai;
