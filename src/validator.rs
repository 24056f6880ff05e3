use crate::file::FileReference;
use crate::host::HostUtils;
use crate::mime::is_accepted;
use log::debug;
use std::borrow::Cow;

/// Media type of a file as far as it can be told.
///
/// URLs are typed by their filename extension; `None` when the URL has no extension.
/// An extension missing from the lookup table gives an empty media type.
pub fn media_type_of<'a>(
    file: &'a FileReference,
    utils: &dyn HostUtils,
) -> Option<Cow<'a, str>> {
    match file {
        FileReference::Url(url) => {
            let filename = utils.filename_from_url(url);
            let extension = utils.extension_from_filename(&filename)?;
            Some(Cow::Owned(utils.guess_mime_type(&extension)))
        }
        FileReference::Descriptor(descriptor) => {
            Some(Cow::Borrowed(descriptor.media_type.as_str()))
        }
    }
}

/// Check a file against the accepted type patterns.
///
/// Always accepts when no patterns are configured, and when the type of a URL
/// cannot be told.
pub fn validate_file<S: AsRef<str>>(
    file: &FileReference,
    accepted_file_types: &[S],
    utils: &dyn HostUtils,
) -> bool {
    if accepted_file_types.is_empty() {
        return true;
    }

    match media_type_of(file, utils) {
        Some(media_type) => {
            let accepted = is_accepted(accepted_file_types, &media_type);
            debug!("File of type {media_type:?} accepted: {accepted}");
            accepted
        }
        None => {
            debug!("Could not guess type of {file:?}, accepting");
            true
        }
    }
}
