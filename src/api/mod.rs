//! HTTP presentation surface over the booking state manager.
//!
//! Handlers are a thin JSON mapping: every mutation still goes through
//! [`BookingState`](crate::booking::BookingState) operations, taken under a
//! single lock so each action runs to completion before the next.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use tokio::sync::Mutex;

use crate::booking::{BookingError, BookingState};
use crate::core::ai::CareAssistant;

pub mod handlers;
pub mod routes;

pub use routes::configure;

/// Shared application state handed to every handler.
pub struct AppState {
    pub booking: Mutex<BookingState>,
    pub assistant: Arc<dyn CareAssistant>,
}

impl AppState {
    pub fn new(booking: BookingState, assistant: Arc<dyn CareAssistant>) -> Self {
        Self {
            booking: Mutex::new(booking),
            assistant,
        }
    }
}

impl ResponseError for BookingError {
    fn status_code(&self) -> StatusCode {
        match self {
            BookingError::NotFound { .. } => StatusCode::NOT_FOUND,
            BookingError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            BookingError::InvalidTransition { .. } => StatusCode::CONFLICT,
            BookingError::PermissionDenied(_) => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
