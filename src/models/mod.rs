// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{PeerProfile, ViewerProfile, Event, EventMode, CareerLink, CareerLinkKind, ChatMessage, ChatRole, Reminder, RankedPeer};
pub use requests::{ListEventsQuery, FindPeersQuery, UpdateProfileRequest, RegisterEventRequest, CreateReminderRequest, ChatRequest};
pub use responses::{EventEntry, EventsResponse, MatchesResponse, ProfileResponse, CareerResponse, ChatResponse, ChatHistoryResponse, RegisterResponse, ReminderResponse, HealthResponse, ErrorResponse};
