use std::path::Path;
use url::Url;

/// Get the filename at the end of a URL, without query string or fragment
pub fn filename_from_url(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url) {
        return parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string();
    }

    // Relative references like "files/photo.png?v=2"
    let path = url.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/').next().unwrap_or_default().to_string()
}

/// Get the extension of a filename, if it has one
pub fn extension_from_filename(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
}

/// Guess a media type from a file extension (case-insensitive).
/// Returns an empty string for unknown extensions.
pub fn guess_mime_type(extension: &str) -> String {
    mime_guess::from_ext(extension)
        .first_raw()
        .map(str::to_string)
        .unwrap_or_default()
}

/// Replace every `{name}` placeholder in `template` with its value
pub fn replace_in_string(template: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

/// Split a comma separated list of accepted types, as found in an `accept` attribute
pub fn parse_accepted_types(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(str::to_string)
        .collect()
}
