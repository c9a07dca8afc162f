// Route exports
pub mod career;
pub mod chat;
pub mod events;
pub mod peers;

use std::sync::Arc;
use actix_web::{web, HttpResponse, Responder};

use crate::config::MatchingSettings;
use crate::core::CampusBot;
use crate::models::{CareerLink, Event, HealthResponse, PeerProfile};
use crate::services::JsonStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
    pub bot: CampusBot,
    pub events: Arc<Vec<Event>>,
    pub profiles: Arc<Vec<PeerProfile>>,
    pub career: Arc<Vec<CareerLink>>,
    pub matching: MatchingSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(events::configure)
            .configure(peers::configure)
            .configure(career::configure)
            .configure(chat::configure),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use crate::models::HealthResponse;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
