use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::search_events;
use crate::models::{
    CreateReminderRequest, ErrorResponse, EventEntry, EventsResponse, ListEventsQuery,
    RegisterEventRequest, RegisterResponse, Reminder, ReminderResponse,
};
use crate::routes::AppState;

/// Configure event hub routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::get().to(list_events))
        .route("/events/register", web::post().to(register_event))
        .route("/events/reminder", web::post().to(create_reminder));
}

/// List events endpoint
///
/// GET /api/v1/events?q=cloud
///
/// Filters by title/tag substring and returns events in date order, each
/// annotated with the viewer's registration state.
async fn list_events(
    state: web::Data<AppState>,
    query: web::Query<ListEventsQuery>,
) -> impl Responder {
    let found = search_events(&state.events, &query.q);

    let mut entries = Vec::with_capacity(found.len());
    for event in found {
        let registered = state.store.is_registered(&event.id).await;
        entries.push(EventEntry { event, registered });
    }

    HttpResponse::Ok().json(EventsResponse { events: entries })
}

/// Register for an event
///
/// POST /api/v1/events/register
///
/// Request body:
/// ```json
/// { "eventId": "e1" }
/// ```
async fn register_event(
    state: web::Data<AppState>,
    req: web::Json<RegisterEventRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if !state.events.iter().any(|ev| ev.id == req.event_id) {
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Unknown event".to_string(),
            message: format!("No event with id {}", req.event_id),
            status_code: 404,
        });
    }

    match state.store.register_event(&req.event_id).await {
        Ok(newly_registered) => {
            tracing::info!(
                "Registration for event {} (newly registered: {})",
                req.event_id,
                newly_registered
            );
            HttpResponse::Ok().json(RegisterResponse {
                success: true,
                newly_registered,
            })
        }
        Err(e) => {
            tracing::error!("Failed to persist registration for {}: {}", req.event_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to register".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Record an event reminder
///
/// POST /api/v1/events/reminder
///
/// Request body:
/// ```json
/// { "userId": "u1", "eventId": "e1", "time": "2025-09-15T09:00:00Z" }
/// ```
///
/// Reminders are only recorded; nothing schedules or delivers them.
async fn create_reminder(
    state: web::Data<AppState>,
    req: web::Json<CreateReminderRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let reminder = Reminder {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: req.user_id.clone(),
        event_id: req.event_id.clone(),
        time: req.time.clone(),
        created_at: chrono::Utc::now(),
    };
    let reminder_id = reminder.id.clone();

    match state.store.add_reminder(reminder).await {
        Ok(()) => {
            tracing::debug!("Recorded reminder {} for event {}", reminder_id, req.event_id);
            HttpResponse::Ok().json(ReminderResponse {
                success: true,
                reminder_id,
            })
        }
        Err(e) => {
            tracing::error!("Failed to record reminder: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to record reminder".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
