use file_validate_type::{Config, FileReference, Filter, Plugin, Query};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration as the host would hand it over
    let config = Config::from_json(
        r#"{
            "acceptedFileTypes": ["image/png", "image/jpeg", "application/pdf"],
            "fileValidateTypeLabelExpectedTypesMap": {
                "image/png": ".png",
                "image/jpeg": ".jpg",
                "application/pdf": ".pdf"
            }
        }"#,
    )?;

    // Register the plugin with a host that keeps its filters in a list
    let mut filters: Vec<Filter> = Vec::new();
    let options = Arc::new(Plugin::new()).register(&mut filters);

    println!("Registered {} filters", filters.len());
    for option in &options {
        println!("- option {} (default: {})", option.name, option.default);
    }

    let files = [
        FileReference::url("https://example.com/uploads/photo.JPG"),
        FileReference::url("https://example.com/uploads/movie.mp4"),
        FileReference::url("https://example.com/uploads/no-extension"),
        FileReference::descriptor("application/pdf"),
    ];

    let query: &dyn Query = &config;
    for filter in &filters {
        let Filter::LoadFile(load_file) = filter else {
            continue;
        };

        for file in &files {
            match load_file(file.clone(), query).await {
                Ok(file) => println!("Accepted: {file:?}"),
                Err(rejection) => println!(
                    "Rejected: {file:?}\n  {}\n  {}",
                    rejection.status.main, rejection.status.sub
                ),
            }
        }
    }

    Ok(())
}
