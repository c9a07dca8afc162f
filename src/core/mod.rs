// Core algorithm exports
pub mod affinity;
pub mod bot;
pub mod events;
pub mod tags;

pub use affinity::{jaccard, rank, star_rating};
pub use bot::CampusBot;
pub use events::search_events;
pub use tags::{parse_tags, tag_set, viewer_tag_set, TagSet};
