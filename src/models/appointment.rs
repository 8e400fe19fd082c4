use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::user::Role;

/// The bookable time-slot labels offered by every clinic.
pub const TIME_SLOTS: [&str; 7] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "01:00 PM", "02:00 PM", "04:00 PM", "05:00 PM",
];

/// Lifecycle status of an appointment.
///
/// Transitions are constrained to the table in [`valid_transitions`];
/// `Completed` and `Cancelled` are terminal.
///
/// [`valid_transitions`]: AppointmentStatus::valid_transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Statuses an appointment may legally move to from `self`.
    ///
    /// Re-entering the current status is not listed, so repeating a
    /// transition (e.g. confirming twice) is rejected rather than treated
    /// as an idempotent no-op.
    pub fn valid_transitions(self) -> &'static [AppointmentStatus] {
        match self {
            AppointmentStatus::Pending => {
                &[AppointmentStatus::Confirmed, AppointmentStatus::Cancelled]
            }
            AppointmentStatus::Confirmed => {
                &[AppointmentStatus::Completed, AppointmentStatus::Cancelled]
            }
            // Terminal states
            AppointmentStatus::Completed | AppointmentStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        self.valid_transitions().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.valid_transitions().is_empty()
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "Pending"),
            AppointmentStatus::Confirmed => write!(f, "Confirmed"),
            AppointmentStatus::Completed => write!(f, "Completed"),
            AppointmentStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A booking linking one patient to one clinic at a date and time slot.
///
/// Appointments are never deleted; cancellation is a status. When the
/// status moves to `Cancelled`, `cancelled_by` records whether the patient
/// or the clinic side initiated it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub clinic_id: String,
    pub patient_id: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub status: AppointmentStatus,
    pub medical_report_summary: Option<String>,
    pub document_name: Option<String>,
    pub notes: Option<String>,
    pub cancelled_by: Option<Role>,
}
