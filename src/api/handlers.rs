//! Request handlers for the JSON API.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::booking::{BookingError, BookingRequest, ClinicFilter};
use crate::core::ai::SearchIntent;
use crate::models::{Appointment, AppointmentStatus, Clinic, Role, TIME_SLOTS};

// ===== Session =====

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: Role,
}

pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, BookingError> {
    let mut booking = state.booking.lock().await;
    let user = booking.authenticate(body.role)?;
    Ok(HttpResponse::Ok().json(user))
}

pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    state.booking.lock().await.logout();
    HttpResponse::NoContent().finish()
}

// ===== Clinics =====

#[derive(Debug, Deserialize)]
pub struct ClinicQuery {
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub clinic_type: Option<String>,
}

pub async fn list_clinics(
    state: web::Data<AppState>,
    query: web::Query<ClinicQuery>,
) -> HttpResponse {
    let filter = ClinicFilter {
        location: query.location.clone(),
        clinic_type: query.clinic_type.clone(),
    };
    let booking = state.booking.lock().await;
    HttpResponse::Ok().json(booking.search_clinics(&filter))
}

pub async fn pending_clinics(state: web::Data<AppState>) -> HttpResponse {
    let booking = state.booking.lock().await;
    HttpResponse::Ok().json(booking.unverified_clinics())
}

pub async fn get_clinic(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, BookingError> {
    let booking = state.booking.lock().await;
    let clinic = booking.clinic(&path)?.clone();
    Ok(HttpResponse::Ok().json(clinic))
}

pub async fn clinic_reviews(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, BookingError> {
    let booking = state.booking.lock().await;
    booking.clinic(&path)?;
    Ok(HttpResponse::Ok().json(booking.reviews_for_clinic(&path)))
}

/// Verification acts as the currently logged-in user; without a session the
/// caller is a guest and is denied.
pub async fn verify_clinic(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, BookingError> {
    let mut booking = state.booking.lock().await;
    let role = booking.current_user().map(|u| u.role).unwrap_or(Role::Guest);
    let clinic = booking.verify_clinic(&path, role)?;
    Ok(HttpResponse::Ok().json(clinic))
}

// ===== Appointments =====

#[derive(Debug, Deserialize)]
pub struct BookAppointmentBody {
    pub clinic_id: String,
    pub patient_id: String,
    pub date: String,
    pub time_slot: String,
    /// Raw medical report text; summarized through the AI collaborator
    /// before the appointment is stored.
    pub report_text: Option<String>,
    pub document_name: Option<String>,
    pub notes: Option<String>,
}

pub async fn book_appointment(
    state: web::Data<AppState>,
    body: web::Json<BookAppointmentBody>,
) -> Result<HttpResponse, BookingError> {
    let body = body.into_inner();

    // Summarize before taking the state lock. The summary is informational
    // only and never gates the booking.
    let summary = match &body.report_text {
        Some(text) => Some(state.assistant.summarize_report(text).await),
        None => None,
    };

    let mut booking = state.booking.lock().await;
    let appointment = booking.book_appointment(BookingRequest {
        clinic_id: body.clinic_id,
        patient_id: body.patient_id,
        date: body.date,
        time_slot: body.time_slot,
        medical_report_summary: summary,
        document_name: body.document_name,
        notes: body.notes,
    })?;
    Ok(HttpResponse::Created().json(appointment))
}

#[derive(Debug, Deserialize)]
pub struct AppointmentQuery {
    pub patient_id: Option<String>,
    pub status: Option<AppointmentStatus>,
}

pub async fn list_appointments(
    state: web::Data<AppState>,
    query: web::Query<AppointmentQuery>,
) -> HttpResponse {
    let booking = state.booking.lock().await;
    let appointments: Vec<Appointment> = booking
        .appointments()
        .iter()
        .filter(|a| {
            query
                .patient_id
                .as_deref()
                .map_or(true, |p| a.patient_id == p)
        })
        .filter(|a| query.status.map_or(true, |s| a.status == s))
        .cloned()
        .collect();
    HttpResponse::Ok().json(appointments)
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateBody {
    pub status: AppointmentStatus,
}

pub async fn update_appointment_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<StatusUpdateBody>,
) -> Result<HttpResponse, BookingError> {
    let mut booking = state.booking.lock().await;
    let actor = booking
        .current_user()
        .cloned()
        .ok_or_else(|| BookingError::PermissionDenied("login required".into()))?;
    let appointment = booking.update_appointment_status(&path, body.status, &actor)?;
    Ok(HttpResponse::Ok().json(appointment))
}

// ===== Search =====

#[derive(Debug, Deserialize)]
pub struct SmartSearchQuery {
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SmartSearchResponse {
    pub intent: SearchIntent,
    pub results: Vec<Clinic>,
}

/// Free-text search: parse the query through the AI collaborator, then run
/// the structured clinic search with whatever it extracted.
pub async fn smart_search(
    state: web::Data<AppState>,
    query: web::Query<SmartSearchQuery>,
) -> HttpResponse {
    let intent = state.assistant.parse_search_intent(&query.q).await;
    let filter = ClinicFilter {
        location: intent.city.clone(),
        clinic_type: intent.clinic_type.clone(),
    };
    let booking = state.booking.lock().await;
    let results = booking.search_clinics(&filter);
    HttpResponse::Ok().json(SmartSearchResponse { intent, results })
}

// ===== Misc =====

pub async fn time_slots() -> HttpResponse {
    HttpResponse::Ok().json(TIME_SLOTS)
}

pub async fn stats(state: web::Data<AppState>) -> HttpResponse {
    let booking = state.booking.lock().await;
    HttpResponse::Ok().json(booking.stats())
}
