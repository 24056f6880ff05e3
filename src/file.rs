use serde::{Deserialize, Serialize};

/// A file handed to the plugin by the host
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FileReference {
    /// Remote file; its type is guessed from the URL's filename extension
    Url(String),

    /// Local file with a known media type
    Descriptor(FileDescriptor),
}

/// A file whose media type is already known, e.g. from a file picker
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct FileDescriptor {
    /// Media type of the file, empty when the host could not tell
    #[serde(rename = "type", default)]
    pub media_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl FileDescriptor {
    pub fn new(media_type: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

impl FileReference {
    /// Reference a remote file by URL
    pub fn url(url: impl Into<String>) -> Self {
        FileReference::Url(url.into())
    }

    /// Reference a local file by its media type
    pub fn descriptor(media_type: impl Into<String>) -> Self {
        FileReference::Descriptor(FileDescriptor::new(media_type))
    }
}

impl From<FileDescriptor> for FileReference {
    fn from(descriptor: FileDescriptor) -> Self {
        FileReference::Descriptor(descriptor)
    }
}
