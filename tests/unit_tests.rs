// Unit tests for Campus Connect

use campus_connect::core::{
    affinity::{jaccard, rank, star_rating},
    bot::CampusBot,
    events::search_events,
    tags::{parse_tags, tag_set, viewer_tag_set, TagSet},
};
use campus_connect::models::{Event, EventMode, PeerProfile};

fn profile(id: &str, skills: &[&str]) -> PeerProfile {
    PeerProfile {
        id: id.to_string(),
        name: format!("User {}", id),
        year: "2nd Year".to_string(),
        branch: "CSE".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        looking_for: vec![],
        bio: String::new(),
    }
}

fn event(id: &str, title: &str, date: &str, tags: &[&str]) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        mode: EventMode::Online,
        venue: "Google Meet".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        link: "https://example.com".to_string(),
    }
}

#[test]
fn test_jaccard_empty_empty_is_zero() {
    assert_eq!(jaccard(&TagSet::new(), &TagSet::new()), 0.0);
}

#[test]
fn test_jaccard_self_similarity_is_one() {
    for tags in [
        tag_set(["a"]),
        tag_set(["android", "kotlin", "ui"]),
        tag_set(["x", "y", "z", "w"]),
    ] {
        assert_eq!(jaccard(&tags, &tags), 1.0);
    }
}

#[test]
fn test_jaccard_is_symmetric() {
    let cases = [
        (tag_set(["a", "b"]), tag_set(["b", "c"])),
        (tag_set(["a"]), TagSet::new()),
        (tag_set(["x", "y"]), tag_set(["p", "q"])),
    ];
    for (a, b) in &cases {
        assert_eq!(jaccard(a, b), jaccard(b, a));
    }
}

#[test]
fn test_jaccard_stays_in_unit_interval() {
    let sets = [
        TagSet::new(),
        tag_set(["a"]),
        tag_set(["a", "b"]),
        tag_set(["b", "c", "d"]),
    ];
    for a in &sets {
        for b in &sets {
            let score = jaccard(a, b);
            assert!(score >= 0.0 && score <= 1.0, "score {} out of range", score);
        }
    }
}

#[test]
fn test_duplicate_tags_collapse() {
    // ["a","a","b"] vs ["b"] must equal ["a","b"] vs ["b"] = 1/2
    let with_dupes = jaccard(&tag_set(["a", "a", "b"]), &tag_set(["b"]));
    let without = jaccard(&tag_set(["a", "b"]), &tag_set(["b"]));
    assert_eq!(with_dupes, without);
    assert_eq!(with_dupes, 0.5);
}

#[test]
fn test_ranking_is_stable_for_ties() {
    // P1 and P2 tie at 0.5, P3 scores higher: expect [P3, P1, P2]
    let viewer = tag_set(["a", "b"]);
    let pool = vec![
        profile("P1", &["a"]),
        profile("P2", &["b"]),
        profile("P3", &["a", "b"]),
    ];

    let ranked = rank(&viewer, &pool);
    let ids: Vec<&str> = ranked.iter().map(|r| r.user_id.as_str()).collect();
    assert_eq!(ids, vec!["P3", "P1", "P2"]);
}

#[test]
fn test_empty_pool_ranks_empty() {
    assert!(rank(&tag_set(["a", "b"]), &[]).is_empty());
    assert!(rank(&TagSet::new(), &[]).is_empty());
}

#[test]
fn test_star_rating_one_decimal() {
    assert_eq!(star_rating(0.2), 1.0);
    assert_eq!(star_rating(1.0), 5.0);
    assert_eq!(star_rating(0.33), 1.7);
}

#[test]
fn test_parse_tags_round_trip_into_set() {
    let tags = parse_tags("android, kotlin , android,, ui");
    assert_eq!(tags.len(), 4); // duplicates survive parsing
    assert_eq!(tag_set(tags).len(), 3); // and collapse in the set
}

#[test]
fn test_viewer_tags_union_skills_and_interests() {
    let skills = vec!["web".to_string(), "ui".to_string()];
    let interests = vec!["android".to_string(), "cloud".to_string()];
    let tags = viewer_tag_set(&skills, &interests);
    assert_eq!(tags.len(), 4);
    assert!(tags.contains("ui"));
    assert!(tags.contains("cloud"));
}

#[test]
fn test_event_search_sorts_by_date() {
    let events = vec![
        event("late", "GenAI Hands-on", "2025-10-02", &["genai"]),
        event("early", "Cloud Workshop", "2025-09-15", &["cloud"]),
        event("mid", "Android Workshop", "2025-09-21", &["android"]),
    ];

    let all = search_events(&events, "");
    let ids: Vec<&str> = all.iter().map(|ev| ev.id.as_str()).collect();
    assert_eq!(ids, vec!["early", "mid", "late"]);
}

#[test]
fn test_event_search_filters_by_title_and_tag() {
    let events = vec![
        event("e1", "Intro to Google Cloud", "2025-09-15", &["cloud", "firebase"]),
        event("e2", "Android Workshop", "2025-09-21", &["android", "kotlin"]),
    ];

    assert_eq!(search_events(&events, "google").len(), 1);
    assert_eq!(search_events(&events, "kotlin").len(), 1);
    assert_eq!(search_events(&events, "rust").len(), 0);
}

#[test]
fn test_bot_covers_all_rule_classes() {
    let bot = CampusBot::new().expect("rule table compiles");

    assert!(bot.reply("any workshop soon?").contains("Event Hub"));
    assert!(bot.reply("what about google programs").contains("Career Hub"));
    assert!(bot.reply("need a study group").contains("Peer Connect"));
    assert!(bot.reply("help please").contains("Campus Ambassador"));
    assert!(bot.reply("xyzzy").contains("Try asking"));
    assert!(bot.reply("").contains("Ask me about"));
}
