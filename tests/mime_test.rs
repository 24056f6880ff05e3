use file_validate_type::{group_of, is_accepted, matches_wildcard};

const MEDIA_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/svg+xml",
    "video/mp4",
    "audio/ogg",
    "application/pdf",
    "text/plain",
    "",
];

#[test]
fn test_empty_list_accepts_everything() {
    let none: [&str; 0] = [];
    for media_type in MEDIA_TYPES {
        assert!(is_accepted(&none, media_type), "{media_type:?}");
    }
}

#[test]
fn test_exact_match_accepts_itself() {
    for media_type in MEDIA_TYPES {
        assert!(is_accepted(&[*media_type], media_type), "{media_type:?}");
    }
}

#[test]
fn test_wildcard_group() {
    assert!(is_accepted(&["image/*"], "image/png"));
    assert!(is_accepted(&["image/*"], "image/svg+xml"));
    assert!(!is_accepted(&["image/*"], "video/mp4"));
    assert!(!is_accepted(&["image/*"], ""));
}

#[test]
fn test_any_pattern_may_match() {
    let accepted = ["application/pdf", "video/*", "image/png"];

    assert!(is_accepted(&accepted, "application/pdf"));
    assert!(is_accepted(&accepted, "video/webm"));
    assert!(is_accepted(&accepted, "image/png"));
    assert!(!is_accepted(&accepted, "image/jpeg"));
    assert!(!is_accepted(&accepted, "application/zip"));
}

#[test]
fn test_owned_patterns() {
    let accepted = vec!["audio/*".to_string()];
    assert!(is_accepted(&accepted, "audio/ogg"));
}

#[test]
fn test_group_of_and_wildcard() {
    assert_eq!(group_of("audio/ogg"), Some("audio"));
    assert!(matches_wildcard("audio/ogg", "audio/*"));
    assert!(!matches_wildcard("audio/ogg", "audio/ogg"));
    assert!(!matches_wildcard("audiobook/ogg", "audio/*"));
}
