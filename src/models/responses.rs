use serde::{Deserialize, Serialize};
use crate::models::domain::{CareerLink, ChatMessage, Event, RankedPeer, ViewerProfile};

/// An event annotated with the viewer's registration state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEntry {
    #[serde(flatten)]
    pub event: Event,
    pub registered: bool,
}

/// Response for the event listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<EventEntry>,
}

/// Response for the peer matching endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<RankedPeer>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the viewer profile endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: ViewerProfile,
    /// The derived ranking tag set (skills ∪ interests), sorted for display.
    pub tags: Vec<String>,
}

/// Response for the career links endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerResponse {
    pub links: Vec<CareerLink>,
}

/// Response for a chatbot exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// Response for the chat history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessage>,
}

/// Response for event registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    /// False when the viewer was already registered for this event.
    #[serde(rename = "newlyRegistered")]
    pub newly_registered: bool,
}

/// Response for reminder creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReminderResponse {
    pub success: bool,
    #[serde(rename = "reminderId")]
    pub reminder_id: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
