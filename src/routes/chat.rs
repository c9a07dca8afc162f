use actix_web::{web, HttpResponse, Responder};

use crate::models::{ChatHistoryResponse, ChatMessage, ChatRequest, ChatResponse, ChatRole, ErrorResponse};
use crate::routes::AppState;

/// Configure CampusBot routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat/message", web::post().to(send_message))
        .route("/chat/history", web::get().to(get_history));
}

/// Send a message to CampusBot
///
/// POST /api/v1/chat/message
///
/// Request body:
/// ```json
/// { "message": "upcoming events" }
/// ```
///
/// The user message and the bot reply are both appended to the persisted
/// transcript.
async fn send_message(
    state: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> impl Responder {
    let reply = state.bot.reply(&req.message);

    let exchange = [
        ChatMessage {
            role: ChatRole::User,
            text: req.message.clone(),
        },
        ChatMessage {
            role: ChatRole::Bot,
            text: reply.clone(),
        },
    ];

    if let Err(e) = state.store.append_chat(exchange).await {
        tracing::error!("Failed to persist chat exchange: {}", e);
        return HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Failed to record chat".to_string(),
            message: e.to_string(),
            status_code: 500,
        });
    }

    HttpResponse::Ok().json(ChatResponse { reply })
}

/// Get the chat transcript
///
/// GET /api/v1/chat/history
async fn get_history(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ChatHistoryResponse {
        messages: state.store.chat_history().await,
    })
}
