//! Campus Connect - community service for campus events, peer matching,
//! career resources, and the CampusBot assistant.
//!
//! The core of this library is the affinity ranker: peer profiles are scored
//! against the viewer's combined skill/interest tag set using Jaccard
//! similarity and returned in descending score order.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{affinity::{jaccard, rank, star_rating}, tags::{parse_tags, tag_set, viewer_tag_set, TagSet}};
pub use crate::models::{PeerProfile, ViewerProfile, Event, CareerLink, RankedPeer, ChatMessage, ChatRole};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let tags = tag_set(["rust", "rust", "web"]);
        assert_eq!(tags.len(), 2);
    }
}
