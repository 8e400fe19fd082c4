//! TravelCare platform
//!
//! Main entry point for the TravelCare booking server.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use travelcare::api::{self, AppState};
use travelcare::booking::BookingState;
use travelcare::config;
use travelcare::core::ai::GeminiClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = config::load_config().expect("Failed to load configuration");

    // Create app state: seeded booking collections plus the AI collaborator
    let assistant = Arc::new(GeminiClient::new(config.ai.clone()));
    let state = web::Data::new(AppState::new(BookingState::seeded(), assistant));

    tracing::info!(host = %config.server.host, port = config.server.port, "starting TravelCare server");

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            // Add app state
            .app_data(state.clone())
            // Enable request tracing
            .wrap(TracingLogger::default())
            // API routes
            .configure(api::configure)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
