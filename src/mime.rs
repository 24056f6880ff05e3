//! Matching of media types against accepted type patterns.
//!
//! A pattern is either a full media type (`image/png`) or a wildcard group
//! (`image/*`). Comparison is case-sensitive.

/// Primary group of a media type: `image/png` -> `image`
pub fn group_of(media_type: &str) -> Option<&str> {
    media_type.split('/').next().filter(|group| !group.is_empty())
}

/// Whether `media_type` falls in the group of a wildcard `pattern` like `image/*`
pub fn matches_wildcard(media_type: &str, pattern: &str) -> bool {
    match pattern.strip_suffix("/*") {
        Some(group) if !group.is_empty() => group_of(media_type) == Some(group),
        _ => false,
    }
}

/// Whether `media_type` is allowed by `patterns`. An empty list allows everything.
pub fn is_accepted<S: AsRef<str>>(patterns: &[S], media_type: &str) -> bool {
    patterns.is_empty()
        || patterns.iter().any(|pattern| {
            let pattern = pattern.as_ref();
            pattern == media_type || matches_wildcard(media_type, pattern)
        })
}
