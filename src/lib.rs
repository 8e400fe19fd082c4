//! TravelCare core library
//!
//! This module exports the core functionality of the TravelCare booking
//! platform: the in-memory booking state manager, the domain models, the
//! AI collaborators and the HTTP API surface.

pub mod api;
pub mod booking;
pub mod core;
pub mod fixtures;
pub mod models;

/// Application configuration
pub mod config {
    use serde::Deserialize;

    #[derive(Debug, Clone, Deserialize)]
    pub struct Config {
        pub server: ServerConfig,
        pub ai: AiConfig,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ServerConfig {
        pub host: String,
        pub port: u16,
    }

    /// Settings for the generative-AI collaborator. A missing `api_key`
    /// switches the client into deterministic no-key fallback behavior.
    #[derive(Debug, Clone, Deserialize)]
    pub struct AiConfig {
        pub api_key: Option<String>,
        pub model: String,
        pub endpoint: String,
    }

    /// Load configuration from file
    pub fn load_config() -> Result<Config, config::ConfigError> {
        // Start with default settings, override with environment-specific
        // settings, then with environment variables.
        let env = std::env::var("TRAVELCARE_ENV").unwrap_or_else(|_| "development".into());
        config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("TRAVELCARE").separator("__"))
            .build()?
            .try_deserialize()
    }
}
