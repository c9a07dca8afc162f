use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for listing events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEventsQuery {
    /// Free-text search over titles and tags.
    #[serde(default)]
    pub q: String,
}

/// Query parameters for finding peer matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindPeersQuery {
    pub limit: Option<u16>,
}

/// Request to update the viewer's profile.
///
/// Skills and interests arrive as free-text comma-separated fields, the way
/// the profile form submits them; the handler splits and trims them.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub interests: String,
}

/// Request to register for an event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterEventRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "event_id", rename = "eventId")]
    pub event_id: String,
}

/// Request to record an event reminder.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReminderRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "event_id", rename = "eventId")]
    pub event_id: String,
    #[validate(length(min = 1))]
    pub time: String,
}

/// A message sent to CampusBot. Blank messages are allowed; the bot answers
/// them with its usage prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}
