//! Booking state manager: the single source of truth for users, clinics,
//! appointments and reviews. Every mutation goes through the operations on
//! [`BookingState`] so the role- and status-based invariants always hold.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::fixtures;
use crate::models::{Appointment, AppointmentStatus, Clinic, Review, Role, User};

/// Recoverable failures of booking-state operations.
///
/// Every variant leaves the state untouched: no operation commits a partial
/// mutation on failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
    #[error("permission denied: {0}")]
    PermissionDenied(String),
}

impl BookingError {
    fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        BookingError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Filter for clinic search. Absent fields match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClinicFilter {
    /// Matched case-insensitively as a substring of city, state, name or
    /// address.
    pub location: Option<String>,
    /// Matched case-insensitively as a substring of the clinic type label.
    pub clinic_type: Option<String>,
}

impl ClinicFilter {
    fn matches(&self, clinic: &Clinic) -> bool {
        let location_ok = match &self.location {
            Some(term) => {
                let term = term.to_lowercase();
                clinic.city.to_lowercase().contains(&term)
                    || clinic.state.to_lowercase().contains(&term)
                    || clinic.name.to_lowercase().contains(&term)
                    || clinic.address.to_lowercase().contains(&term)
            }
            None => true,
        };
        let type_ok = match &self.clinic_type {
            Some(term) => clinic
                .clinic_type
                .label()
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        };
        location_ok && type_ok
    }
}

/// Input for [`BookingState::book_appointment`].
///
/// `date` arrives as the raw string the presentation layer collected; it is
/// validated here so an empty or malformed date is an `InvalidInput`, not a
/// panic further down.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub clinic_id: String,
    pub patient_id: String,
    pub date: String,
    pub time_slot: String,
    pub medical_report_summary: Option<String>,
    pub document_name: Option<String>,
    pub notes: Option<String>,
}

/// Aggregate counters backing the admin and provider dashboards.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformStats {
    pub total_users: usize,
    pub total_clinics: usize,
    pub verified_clinics: usize,
    pub total_appointments: usize,
    pub pending_appointments: usize,
    pub confirmed_appointments: usize,
    pub completed_appointments: usize,
    pub cancelled_appointments: usize,
}

/// Owns all platform collections plus the current-user context.
///
/// Collections are insertion-ordered and append-only (appointments are
/// never deleted; cancellation is a status change). Readers get clones,
/// never mutable access.
#[derive(Debug, Default)]
pub struct BookingState {
    users: Vec<User>,
    clinics: Vec<Clinic>,
    appointments: Vec<Appointment>,
    reviews: Vec<Review>,
    current_user: Option<User>,
}

impl BookingState {
    /// Empty state, no seed data.
    pub fn new() -> Self {
        Self::default()
    }

    /// State pre-populated with the demo users, clinics and reviews.
    pub fn seeded() -> Self {
        Self {
            users: fixtures::seed_users(),
            clinics: fixtures::seed_clinics(),
            appointments: Vec::new(),
            reviews: fixtures::seed_reviews(),
            current_user: None,
        }
    }

    // ===== Session =====

    /// Select a representative user for `role` and make it the current
    /// user. There is no credential check in this scope.
    #[instrument(skip(self))]
    pub fn authenticate(&mut self, role: Role) -> Result<User, BookingError> {
        let user = self
            .users
            .iter()
            .find(|u| u.role == role)
            .cloned()
            .ok_or_else(|| BookingError::not_found("user with role", role.to_string()))?;
        info!(user_id = %user.id, %role, "user authenticated");
        self.current_user = Some(user.clone());
        Ok(user)
    }

    /// Clear the current-user context. Never fails.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!(user_id = %user.id, "user logged out");
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    // ===== Lookups =====

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn clinics(&self) -> &[Clinic] {
        &self.clinics
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn clinic(&self, id: &str) -> Result<&Clinic, BookingError> {
        self.clinics
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| BookingError::not_found("clinic", id))
    }

    pub fn user(&self, id: &str) -> Result<&User, BookingError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| BookingError::not_found("user", id))
    }

    pub fn appointment(&self, id: &str) -> Result<&Appointment, BookingError> {
        self.appointments
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| BookingError::not_found("appointment", id))
    }

    // ===== Search =====

    /// Clinics matching `filter`, in insertion order. An empty result is
    /// not an error.
    pub fn search_clinics(&self, filter: &ClinicFilter) -> Vec<Clinic> {
        self.clinics
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect()
    }

    // ===== Appointments =====

    /// Create a new appointment in `Pending` status with a fresh unique id.
    #[instrument(skip(self, request), fields(clinic_id = %request.clinic_id, patient_id = %request.patient_id))]
    pub fn book_appointment(
        &mut self,
        request: BookingRequest,
    ) -> Result<Appointment, BookingError> {
        self.clinic(&request.clinic_id)?;
        self.user(&request.patient_id)?;

        if request.date.trim().is_empty() {
            return Err(BookingError::InvalidInput(
                "appointment date is required".into(),
            ));
        }
        let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d").map_err(|_| {
            BookingError::InvalidInput(format!("unparseable appointment date: {}", request.date))
        })?;
        if request.time_slot.trim().is_empty() {
            return Err(BookingError::InvalidInput(
                "appointment time slot is required".into(),
            ));
        }

        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            clinic_id: request.clinic_id,
            patient_id: request.patient_id,
            date,
            time_slot: request.time_slot,
            status: AppointmentStatus::Pending,
            medical_report_summary: request.medical_report_summary,
            document_name: request.document_name,
            notes: request.notes,
            cancelled_by: None,
        };
        info!(appointment_id = %appointment.id, "appointment booked");
        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Move an appointment to `new_status` on behalf of `actor`.
    ///
    /// Transition legality is checked before role gating, so an illegal
    /// transition is `InvalidTransition` no matter who asks for it.
    /// Providers and admins may confirm, cancel and complete; the owning
    /// patient may only cancel its own pending request.
    #[instrument(skip(self, actor), fields(actor_id = %actor.id, role = %actor.role))]
    pub fn update_appointment_status(
        &mut self,
        id: &str,
        new_status: AppointmentStatus,
        actor: &User,
    ) -> Result<Appointment, BookingError> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| BookingError::not_found("appointment", id))?;

        let from = appointment.status;
        if !from.can_transition_to(new_status) {
            warn!(%from, to = %new_status, "illegal status transition rejected");
            return Err(BookingError::InvalidTransition {
                from,
                to: new_status,
            });
        }

        match actor.role {
            Role::Provider | Role::Admin => {}
            Role::Patient => {
                let owns = actor.id == appointment.patient_id;
                let is_pending_cancel = new_status == AppointmentStatus::Cancelled
                    && from == AppointmentStatus::Pending;
                if !(owns && is_pending_cancel) {
                    return Err(BookingError::PermissionDenied(
                        "patients may only cancel their own pending appointments".into(),
                    ));
                }
            }
            Role::Guest => {
                return Err(BookingError::PermissionDenied(
                    "guests may not modify appointments".into(),
                ));
            }
        }

        appointment.status = new_status;
        if new_status == AppointmentStatus::Cancelled {
            appointment.cancelled_by = Some(actor.role);
        }
        info!(%from, to = %new_status, "appointment status updated");
        Ok(appointment.clone())
    }

    /// Appointments belonging to one patient, in booking order.
    pub fn appointments_for_patient(&self, patient_id: &str) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect()
    }

    /// The provider-facing incoming-request queue.
    pub fn pending_appointments(&self) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Pending)
            .cloned()
            .collect()
    }

    // ===== Clinics =====

    /// Grant the verified badge to a clinic. Admin only; idempotent.
    #[instrument(skip(self))]
    pub fn verify_clinic(
        &mut self,
        clinic_id: &str,
        acting_role: Role,
    ) -> Result<Clinic, BookingError> {
        match acting_role {
            Role::Admin => {}
            Role::Patient | Role::Provider | Role::Guest => {
                return Err(BookingError::PermissionDenied(
                    "only admins may verify clinics".into(),
                ));
            }
        }
        let clinic = self
            .clinics
            .iter_mut()
            .find(|c| c.id == clinic_id)
            .ok_or_else(|| BookingError::not_found("clinic", clinic_id))?;
        if !clinic.verified {
            clinic.verified = true;
            info!(%clinic_id, "clinic verified");
        }
        Ok(clinic.clone())
    }

    /// The admin-facing verification queue.
    pub fn unverified_clinics(&self) -> Vec<Clinic> {
        self.clinics.iter().filter(|c| !c.verified).cloned().collect()
    }

    pub fn reviews_for_clinic(&self, clinic_id: &str) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.clinic_id == clinic_id)
            .cloned()
            .collect()
    }

    // ===== Dashboards =====

    pub fn stats(&self) -> PlatformStats {
        let count = |status: AppointmentStatus| {
            self.appointments
                .iter()
                .filter(|a| a.status == status)
                .count()
        };
        PlatformStats {
            total_users: self.users.len(),
            total_clinics: self.clinics.len(),
            verified_clinics: self.clinics.iter().filter(|c| c.verified).count(),
            total_appointments: self.appointments.len(),
            pending_appointments: count(AppointmentStatus::Pending),
            confirmed_appointments: count(AppointmentStatus::Confirmed),
            completed_appointments: count(AppointmentStatus::Completed),
            cancelled_appointments: count(AppointmentStatus::Cancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(id: &str) -> User {
        User {
            id: id.into(),
            name: format!("Patient {id}"),
            email: format!("{id}@example.com"),
            role: Role::Patient,
            avatar_url: None,
        }
    }

    fn provider(id: &str) -> User {
        User {
            id: id.into(),
            name: format!("Dr. {id}"),
            email: format!("{id}@lifecare.com"),
            role: Role::Provider,
            avatar_url: None,
        }
    }

    fn guest() -> User {
        User {
            id: "g1".into(),
            name: "Guest".into(),
            email: "guest@example.com".into(),
            role: Role::Guest,
            avatar_url: None,
        }
    }

    fn state() -> BookingState {
        let mut state = BookingState::seeded();
        state.users.push(patient("u9"));
        state
    }

    fn request(clinic_id: &str, patient_id: &str) -> BookingRequest {
        BookingRequest {
            clinic_id: clinic_id.into(),
            patient_id: patient_id.into(),
            date: "2025-06-01".into(),
            time_slot: "09:00 AM".into(),
            medical_report_summary: None,
            document_name: None,
            notes: None,
        }
    }

    #[test]
    fn authenticate_selects_user_by_role_and_sets_session() {
        let mut state = state();
        let user = state.authenticate(Role::Provider).unwrap();
        assert_eq!(user.role, Role::Provider);
        assert_eq!(state.current_user().unwrap().id, user.id);

        state.logout();
        assert!(state.current_user().is_none());
    }

    #[test]
    fn authenticate_unknown_role_is_not_found() {
        let mut state = state();
        let err = state.authenticate(Role::Guest).unwrap_err();
        assert!(matches!(err, BookingError::NotFound { .. }));
        assert!(state.current_user().is_none());
    }

    #[test]
    fn empty_filter_returns_all_clinics_in_order() {
        let state = state();
        let results = state.search_clinics(&ClinicFilter::default());
        let all: Vec<&str> = state.clinics().iter().map(|c| c.id.as_str()).collect();
        let found: Vec<&str> = results.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(found, all);
    }

    #[test]
    fn location_filter_is_case_insensitive_substring() {
        let state = state();
        let results = state.search_clinics(&ClinicFilter {
            location: Some("mumbai".into()),
            clinic_type: None,
        });
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "c2");
    }

    #[test]
    fn location_filter_matches_name_state_and_address_too() {
        let state = state();
        // "Kidney" appears only in clinic names
        let by_name = state.search_clinics(&ClinicFilter {
            location: Some("kidney".into()),
            clinic_type: None,
        });
        assert!(by_name.iter().all(|c| c.name.to_lowercase().contains("kidney")));
        assert!(!by_name.is_empty());

        let by_state = state.search_clinics(&ClinicFilter {
            location: Some("karnataka".into()),
            clinic_type: None,
        });
        assert_eq!(by_state[0].id, "c1");

        let by_address = state.search_clinics(&ClinicFilter {
            location: Some("mg road".into()),
            clinic_type: None,
        });
        assert_eq!(by_address[0].id, "c1");
    }

    #[test]
    fn filters_are_conjunctive() {
        let state = state();
        let results = state.search_clinics(&ClinicFilter {
            location: Some("mumbai".into()),
            clinic_type: Some("dialysis".into()),
        });
        assert!(results.is_empty());
    }

    #[test]
    fn every_search_result_satisfies_the_filter() {
        let state = state();
        let filter = ClinicFilter {
            location: None,
            clinic_type: Some("thalassemia".into()),
        };
        let results = state.search_clinics(&filter);
        assert!(!results.is_empty());
        assert!(results.len() <= state.clinics().len());
        for clinic in &results {
            assert!(clinic.clinic_type.label().to_lowercase().contains("thalassemia"));
        }
    }

    #[test]
    fn no_match_is_an_empty_result_not_an_error() {
        let state = state();
        let results = state.search_clinics(&ClinicFilter {
            location: Some("atlantis".into()),
            clinic_type: None,
        });
        assert!(results.is_empty());
    }

    #[test]
    fn booking_creates_pending_appointment_with_unique_id() {
        let mut state = state();
        let first = state.book_appointment(request("c1", "u1")).unwrap();
        assert_eq!(first.status, AppointmentStatus::Pending);
        assert_eq!(first.clinic_id, "c1");
        assert_eq!(first.patient_id, "u1");
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(first.time_slot, "09:00 AM");

        let second = state.book_appointment(request("c1", "u1")).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(state.appointments().len(), 2);
    }

    #[test]
    fn booking_unknown_clinic_fails_and_leaves_state_unchanged() {
        let mut state = state();
        let err = state.book_appointment(request("nope", "u1")).unwrap_err();
        assert_eq!(
            err,
            BookingError::NotFound {
                kind: "clinic",
                id: "nope".into()
            }
        );
        assert!(state.appointments().is_empty());
    }

    #[test]
    fn booking_unknown_patient_fails() {
        let mut state = state();
        let err = state.book_appointment(request("c1", "nobody")).unwrap_err();
        assert!(matches!(err, BookingError::NotFound { kind: "user", .. }));
        assert!(state.appointments().is_empty());
    }

    #[test]
    fn booking_with_empty_date_or_slot_is_invalid_input() {
        let mut state = state();

        let mut no_date = request("c1", "u1");
        no_date.date = "".into();
        assert!(matches!(
            state.book_appointment(no_date),
            Err(BookingError::InvalidInput(_))
        ));

        let mut bad_date = request("c1", "u1");
        bad_date.date = "tomorrow".into();
        assert!(matches!(
            state.book_appointment(bad_date),
            Err(BookingError::InvalidInput(_))
        ));

        let mut no_slot = request("c1", "u1");
        no_slot.time_slot = "  ".into();
        assert!(matches!(
            state.book_appointment(no_slot),
            Err(BookingError::InvalidInput(_))
        ));

        assert!(state.appointments().is_empty());
    }

    #[test]
    fn provider_confirms_then_reconfirm_is_rejected() {
        let mut state = state();
        let apt = state.book_appointment(request("c1", "u1")).unwrap();

        let confirmed = state
            .update_appointment_status(&apt.id, AppointmentStatus::Confirmed, &provider("p1"))
            .unwrap();
        assert_eq!(confirmed.status, AppointmentStatus::Confirmed);

        let err = state
            .update_appointment_status(&apt.id, AppointmentStatus::Confirmed, &provider("p1"))
            .unwrap_err();
        assert_eq!(
            err,
            BookingError::InvalidTransition {
                from: AppointmentStatus::Confirmed,
                to: AppointmentStatus::Confirmed,
            }
        );
    }

    #[test]
    fn cancelled_is_terminal_for_every_role() {
        let mut state = state();
        let apt = state.book_appointment(request("c1", "u1")).unwrap();
        state
            .update_appointment_status(&apt.id, AppointmentStatus::Cancelled, &provider("p1"))
            .unwrap();

        for actor in [provider("p1"), patient("u1"), guest()] {
            let err = state
                .update_appointment_status(&apt.id, AppointmentStatus::Confirmed, &actor)
                .unwrap_err();
            assert!(matches!(err, BookingError::InvalidTransition { .. }));
        }
    }

    #[test]
    fn owning_patient_cancels_own_pending_appointment() {
        let mut state = state();
        let apt = state.book_appointment(request("c1", "u1")).unwrap();
        let cancelled = state
            .update_appointment_status(&apt.id, AppointmentStatus::Cancelled, &patient("u1"))
            .unwrap();
        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
        assert_eq!(cancelled.cancelled_by, Some(Role::Patient));
    }

    #[test]
    fn other_patient_may_not_cancel() {
        let mut state = state();
        let apt = state.book_appointment(request("c1", "u1")).unwrap();
        let err = state
            .update_appointment_status(&apt.id, AppointmentStatus::Cancelled, &patient("u9"))
            .unwrap_err();
        assert!(matches!(err, BookingError::PermissionDenied(_)));
        assert_eq!(state.appointment(&apt.id).unwrap().status, AppointmentStatus::Pending);
    }

    #[test]
    fn patient_may_not_cancel_once_confirmed() {
        let mut state = state();
        let apt = state.book_appointment(request("c1", "u1")).unwrap();
        state
            .update_appointment_status(&apt.id, AppointmentStatus::Confirmed, &provider("p1"))
            .unwrap();
        let err = state
            .update_appointment_status(&apt.id, AppointmentStatus::Cancelled, &patient("u1"))
            .unwrap_err();
        assert!(matches!(err, BookingError::PermissionDenied(_)));
    }

    #[test]
    fn patient_may_not_confirm_or_complete() {
        let mut state = state();
        let apt = state.book_appointment(request("c1", "u1")).unwrap();
        let err = state
            .update_appointment_status(&apt.id, AppointmentStatus::Confirmed, &patient("u1"))
            .unwrap_err();
        assert!(matches!(err, BookingError::PermissionDenied(_)));
    }

    #[test]
    fn provider_decline_records_cancelling_role() {
        let mut state = state();
        let apt = state.book_appointment(request("c1", "u1")).unwrap();
        let declined = state
            .update_appointment_status(&apt.id, AppointmentStatus::Cancelled, &provider("p1"))
            .unwrap();
        assert_eq!(declined.cancelled_by, Some(Role::Provider));
    }

    #[test]
    fn provider_completes_confirmed_appointment() {
        let mut state = state();
        let apt = state.book_appointment(request("c1", "u1")).unwrap();
        state
            .update_appointment_status(&apt.id, AppointmentStatus::Confirmed, &provider("p1"))
            .unwrap();
        let done = state
            .update_appointment_status(&apt.id, AppointmentStatus::Completed, &provider("p1"))
            .unwrap();
        assert_eq!(done.status, AppointmentStatus::Completed);
    }

    #[test]
    fn unknown_appointment_is_not_found() {
        let mut state = state();
        let err = state
            .update_appointment_status("missing", AppointmentStatus::Confirmed, &provider("p1"))
            .unwrap_err();
        assert!(matches!(err, BookingError::NotFound { .. }));
    }

    #[test]
    fn verify_clinic_is_admin_gated_and_idempotent() {
        let mut state = state();
        assert!(!state.clinic("c3").unwrap().verified);

        for role in [Role::Patient, Role::Provider, Role::Guest] {
            let err = state.verify_clinic("c3", role).unwrap_err();
            assert!(matches!(err, BookingError::PermissionDenied(_)));
            assert!(!state.clinic("c3").unwrap().verified);
        }

        let first = state.verify_clinic("c3", Role::Admin).unwrap();
        assert!(first.verified);
        let second = state.verify_clinic("c3", Role::Admin).unwrap();
        assert!(second.verified);
    }

    #[test]
    fn verify_unknown_clinic_is_not_found_for_admin() {
        let mut state = state();
        let err = state.verify_clinic("missing", Role::Admin).unwrap_err();
        assert!(matches!(err, BookingError::NotFound { .. }));
    }

    #[test]
    fn dashboard_views_reflect_collections() {
        let mut state = state();
        let a = state.book_appointment(request("c1", "u1")).unwrap();
        let b = state.book_appointment(request("c2", "u9")).unwrap();
        state
            .update_appointment_status(&a.id, AppointmentStatus::Confirmed, &provider("p1"))
            .unwrap();

        assert_eq!(state.appointments_for_patient("u1").len(), 1);
        assert_eq!(state.pending_appointments()[0].id, b.id);
        assert_eq!(state.unverified_clinics().len(), 1);
        assert_eq!(state.reviews_for_clinic("c1").len(), 2);

        let stats = state.stats();
        assert_eq!(stats.total_appointments, 2);
        assert_eq!(stats.pending_appointments, 1);
        assert_eq!(stats.confirmed_appointments, 1);
        assert_eq!(stats.verified_clinics, 6);
    }
}
