use file_validate_type::{validate_file, DefaultUtils, FileDescriptor, FileReference};

#[test]
fn test_no_accepted_types_accepts_everything() {
    let none: Vec<String> = Vec::new();

    assert!(validate_file(&FileReference::descriptor("video/mp4"), &none, &DefaultUtils));
    assert!(validate_file(&FileReference::url("https://x/y/a.exe"), &none, &DefaultUtils));
}

#[test]
fn test_descriptor_uses_its_type() {
    let file = FileReference::Descriptor(
        FileDescriptor::new("image/png")
            .with_name("not-really.mp4")
            .with_size(2048),
    );

    assert!(validate_file(&file, &["image/*"], &DefaultUtils));
    assert!(!validate_file(&file, &["video/*"], &DefaultUtils));
}

#[test]
fn test_descriptor_without_type_rejected() {
    let file = FileReference::descriptor("");
    assert!(!validate_file(&file, &["image/*"], &DefaultUtils));
}

#[test]
fn test_url_uppercase_extension_is_image() {
    let file = FileReference::url("http://x/y/photo.JPG");
    assert!(validate_file(&file, &["image/*"], &DefaultUtils));
}

#[test]
fn test_url_without_extension_always_accepted() {
    let file = FileReference::url("http://x/y/photo");

    assert!(validate_file(&file, &["image/*"], &DefaultUtils));
    assert!(validate_file(&file, &["application/pdf"], &DefaultUtils));
}

#[test]
fn test_url_with_query_string() {
    let file = FileReference::url("https://cdn.example.com/media/clip.mp4?sig=abc.def");

    assert!(validate_file(&file, &["video/*"], &DefaultUtils));
    assert!(!validate_file(&file, &["image/*"], &DefaultUtils));
}

#[test]
fn test_url_exact_type() {
    let file = FileReference::url("https://example.com/docs/report.pdf");

    assert!(validate_file(&file, &["application/pdf"], &DefaultUtils));
    assert!(!validate_file(&file, &["application/zip"], &DefaultUtils));
}

#[test]
fn test_relative_url() {
    let file = FileReference::url("uploads/avatar.png");
    assert!(validate_file(&file, &["image/png"], &DefaultUtils));
}
