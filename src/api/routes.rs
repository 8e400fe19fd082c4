//! Route table for the JSON API.

use actix_web::web;

use crate::api::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/auth/login", web::post().to(handlers::login))
            .route("/auth/logout", web::post().to(handlers::logout))
            .route("/clinics", web::get().to(handlers::list_clinics))
            .route("/clinics/pending", web::get().to(handlers::pending_clinics))
            .route("/clinics/{id}", web::get().to(handlers::get_clinic))
            .route("/clinics/{id}/reviews", web::get().to(handlers::clinic_reviews))
            .route("/clinics/{id}/verify", web::post().to(handlers::verify_clinic))
            .route("/appointments", web::get().to(handlers::list_appointments))
            .route("/appointments", web::post().to(handlers::book_appointment))
            .route(
                "/appointments/{id}/status",
                web::post().to(handlers::update_appointment_status),
            )
            .route("/search", web::get().to(handlers::smart_search))
            .route("/slots", web::get().to(handlers::time_slots))
            .route("/stats", web::get().to(handlers::stats)),
    );
}
