// Service exports
pub mod fixtures;
pub mod store;

pub use fixtures::{career_links, demo_events, demo_profiles};
pub use store::{JsonStore, StoreError, StoredState};
