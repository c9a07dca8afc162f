use serde::{Deserialize, Serialize};

/// A candidate peer profile being ranked against the viewer.
///
/// Profiles are static demo fixtures, created at process start and never
/// mutated. Only `skills` participates in ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerProfile {
    pub id: String,
    pub name: String,
    pub year: String,
    pub branch: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "lookingFor", default)]
    pub looking_for: Vec<String>,
    #[serde(default)]
    pub bio: String,
}

/// The current user's editable profile.
///
/// Skills and interests are kept as entered (order and duplicates included);
/// the ranking tag set is derived from them on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerProfile {
    pub name: String,
    pub year: String,
    pub branch: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Default for ViewerProfile {
    fn default() -> Self {
        Self {
            name: "You".to_string(),
            year: "2nd Year".to_string(),
            branch: "CSE".to_string(),
            skills: vec!["web".to_string(), "ui".to_string()],
            interests: vec!["android".to_string(), "cloud".to_string()],
        }
    }
}

/// A campus event. Dates are ISO-8601 strings so lexicographic order is
/// chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub mode: EventMode,
    pub venue: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventMode {
    #[serde(rename = "On-campus")]
    OnCampus,
    Hybrid,
    Online,
}

/// A curated career resource link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerLink {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: CareerLinkKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerLinkKind {
    Program,
    Learning,
    Internship,
    Contest,
}

/// A chat transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

/// A stored event reminder. Recording only; nothing schedules these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "eventId")]
    pub event_id: String,
    pub time: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A ranked peer: a candidate profile annotated with its affinity score
/// against the viewer. Scores are transient and recomputed per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedPeer {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub year: String,
    pub branch: String,
    pub bio: String,
    pub skills: Vec<String>,
    #[serde(rename = "lookingFor")]
    pub looking_for: Vec<String>,
    /// Jaccard affinity in [0, 1].
    pub score: f64,
    /// Display rating: score mapped onto 0-5 stars, one decimal.
    pub stars: f64,
    #[serde(rename = "sharedTags")]
    pub shared_tags: Vec<String>,
}
