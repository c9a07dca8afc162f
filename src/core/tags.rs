use std::collections::HashSet;

/// A deduplicated set of tags. Tags are opaque, case-sensitive strings;
/// callers are responsible for consistent casing.
pub type TagSet = HashSet<String>;

/// Build a tag set from any collection of string-likes, collapsing duplicates.
pub fn tag_set<I, S>(tags: I) -> TagSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tags.into_iter().map(Into::into).collect()
}

/// Parse a free-text comma-separated field into a tag list.
///
/// Each segment is trimmed and empty segments are dropped. Duplicates are
/// kept here so the caller can round-trip the form field; collapse happens
/// when the list is turned into a [`TagSet`].
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The viewer's ranking tag set: the union of their skills and interests.
///
/// Recomputed on every call; the viewer profile is the source of truth.
pub fn viewer_tag_set(skills: &[String], interests: &[String]) -> TagSet {
    skills.iter().chain(interests.iter()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags_trims_and_filters() {
        let tags = parse_tags(" android , kotlin ,, ui ,");
        assert_eq!(tags, vec!["android", "kotlin", "ui"]);
    }

    #[test]
    fn test_parse_tags_empty_input() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , , ").is_empty());
    }

    #[test]
    fn test_tag_set_collapses_duplicates() {
        let set = tag_set(["a", "a", "b"]);
        assert_eq!(set, tag_set(["a", "b"]));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let set = tag_set(["Android", "android"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_viewer_tag_set_is_union() {
        let skills = vec!["web".to_string(), "ui".to_string()];
        let interests = vec!["android".to_string(), "ui".to_string()];

        let tags = viewer_tag_set(&skills, &interests);
        assert_eq!(tags, tag_set(["web", "ui", "android"]));
    }
}
