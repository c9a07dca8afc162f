use crate::models::Event;

/// Filter events by a free-text query and sort them by ascending date.
///
/// An empty query matches everything. A non-empty query is lowercased and
/// matches an event when it is a substring of the lowercased title or of any
/// tag. Dates are ISO-8601 strings, so a plain lexicographic sort orders
/// them chronologically.
pub fn search_events(events: &[Event], query: &str) -> Vec<Event> {
    let needle = query.trim().to_lowercase();

    let mut found: Vec<Event> = events
        .iter()
        .filter(|ev| {
            if needle.is_empty() {
                return true;
            }
            ev.title.to_lowercase().contains(&needle)
                || ev.tags.iter().any(|t| t.contains(&needle))
        })
        .cloned()
        .collect();

    found.sort_by(|a, b| a.date.cmp(&b.date));
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventMode;

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
    fn test_empty_query_returns_all_sorted() {
        let events = vec![
            event("e2", "Android Study Jam", "2025-09-21", &["android"]),
            event("e1", "Cloud Workshop", "2025-09-15", &["cloud"]),
        ];

        let found = search_events(&events, "");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, "e1");
        assert_eq!(found[1].id, "e2");
    }

    #[test]
    fn test_title_substring_match_is_case_insensitive() {
        let events = vec![
            event("e1", "Intro to Google Cloud", "2025-09-15", &["cloud"]),
            event("e2", "Android Study Jam", "2025-09-21", &["android"]),
        ];

        let found = search_events(&events, "CLOUD");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "e1");
    }

    #[test]
    fn test_tag_substring_match() {
        let events = vec![
            event("e1", "Hands-on Session", "2025-10-02", &["genai", "vertex"]),
            event("e2", "Workshop", "2025-09-15", &["cloud"]),
        ];

        // "ai" is a substring of the "genai" tag
        let found = search_events(&events, "ai");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "e1");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let events = vec![event("e1", "Workshop", "2025-09-15", &["cloud"])];
        assert!(search_events(&events, "quantum").is_empty());
    }
}
