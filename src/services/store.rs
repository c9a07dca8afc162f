use std::collections::HashMap;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

use crate::core::CampusBot;
use crate::models::{ChatMessage, ChatRole, Reminder, ViewerProfile};

/// Errors that can occur with store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The persisted application state: everything the original app kept in
/// browser storage, as one JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredState {
    #[serde(default)]
    pub viewer: ViewerProfile,
    /// Event id -> registered. Kept as a map of booleans to match the wire
    /// shape clients already persist.
    #[serde(default)]
    pub registrations: HashMap<String, bool>,
    #[serde(default = "seed_chat")]
    pub chat: Vec<ChatMessage>,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

impl Default for StoredState {
    fn default() -> Self {
        Self {
            viewer: ViewerProfile::default(),
            registrations: HashMap::new(),
            chat: seed_chat(),
            reminders: Vec::new(),
        }
    }
}

fn seed_chat() -> Vec<ChatMessage> {
    vec![ChatMessage {
        role: ChatRole::Bot,
        text: CampusBot::greeting().to_string(),
    }]
}

/// JSON-file-backed state store.
///
/// The whole state is loaded once at startup and rewritten after every
/// mutation. State is small (a profile, a registration map, a chat
/// transcript), so whole-document writes are fine at this scale.
pub struct JsonStore {
    path: PathBuf,
    save_on_change: bool,
    state: RwLock<StoredState>,
}

impl JsonStore {
    /// Open a store at the given path, loading existing state if present.
    ///
    /// A missing file yields the default state; a corrupt file is an error
    /// rather than silent data loss.
    pub fn open<P: AsRef<Path>>(path: P, save_on_change: bool) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let state = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No state file at {}, starting fresh", path.display());
                StoredState::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            save_on_change,
            state: RwLock::new(state),
        })
    }

    /// In-memory store for tests and ephemeral runs.
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::new(),
            save_on_change: false,
            state: RwLock::new(StoredState::default()),
        }
    }

    pub async fn viewer(&self) -> ViewerProfile {
        self.state.read().await.viewer.clone()
    }

    pub async fn update_viewer(&self, viewer: ViewerProfile) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.viewer = viewer;
        self.persist(&state).await
    }

    /// Mark an event as registered. Returns false when it already was;
    /// repeat registrations are idempotent.
    pub async fn register_event(&self, event_id: &str) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        let newly = state
            .registrations
            .insert(event_id.to_string(), true)
            .is_none();
        if newly {
            self.persist(&state).await?;
        }
        Ok(newly)
    }

    pub async fn is_registered(&self, event_id: &str) -> bool {
        self.state
            .read()
            .await
            .registrations
            .get(event_id)
            .copied()
            .unwrap_or(false)
    }

    pub async fn chat_history(&self) -> Vec<ChatMessage> {
        self.state.read().await.chat.clone()
    }

    /// Append a user/bot exchange to the transcript.
    pub async fn append_chat(
        &self,
        messages: impl IntoIterator<Item = ChatMessage>,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.chat.extend(messages);
        self.persist(&state).await
    }

    pub async fn add_reminder(&self, reminder: Reminder) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.reminders.push(reminder);
        self.persist(&state).await
    }

    pub async fn reminders(&self) -> Vec<Reminder> {
        self.state.read().await.reminders.clone()
    }

    /// Write the state document to disk. Called with the write lock held so
    /// saves are serialized with their mutation.
    async fn persist(&self, state: &StoredState) -> Result<(), StoreError> {
        if !self.save_on_change || self.path.as_os_str().is_empty() {
            return Ok(());
        }

        let json = serde_json::to_vec_pretty(state)?;
        tokio::fs::write(&self.path, json).await?;
        tracing::trace!("State saved to {}", self.path.display());
        Ok(())
    }
}
