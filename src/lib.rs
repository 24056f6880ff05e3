//! # File Validate Type
//!
//! Media type validation for an upload widget: files are checked against an
//! allow-list of media types (`image/png`) and wildcard groups (`image/*`), and
//! rejected with a formatted message when they do not match.
//!
//! ## Validating Files
//!
//! ```
//! use file_validate_type::{validate_file, DefaultUtils, FileReference};
//!
//! let accepted = ["image/*", "application/pdf"];
//!
//! // Local files carry their media type
//! assert!(validate_file(&FileReference::descriptor("image/png"), &accepted, &DefaultUtils));
//!
//! // Remote files are typed by their extension
//! assert!(validate_file(&FileReference::url("https://x/y/photo.JPG"), &accepted, &DefaultUtils));
//! assert!(!validate_file(&FileReference::url("https://x/y/clip.mp4"), &accepted, &DefaultUtils));
//! ```
//!
//! ## Registering With The Host
//!
//! ```
//! use file_validate_type::{Config, FileReference, Filter, Plugin, Query};
//! use std::sync::Arc;
//!
//! let mut filters: Vec<Filter> = Vec::new();
//! let options = Arc::new(Plugin::new()).register(&mut filters);
//! assert_eq!(options.len(), 5);
//!
//! let config = Config {
//!     accepted_file_types: vec!["image/png".to_string(), "image/jpeg".to_string()],
//!     ..Default::default()
//! };
//!
//! let query: &dyn Query = &config;
//! for filter in &filters {
//!     if let Filter::LoadFile(load_file) = filter {
//!         let file = FileReference::descriptor("video/mp4");
//!         let result = tokio_test::block_on(load_file(file, query));
//!         let rejection = result.unwrap_err();
//!
//!         assert_eq!(rejection.status.main, "File is of invalid type");
//!         assert_eq!(rejection.status.sub, "Expects image/png or image/jpeg");
//!     }
//! }
//! ```

mod config;
mod error;
mod file;
mod host;
mod mime;
mod models;
mod plugin;
pub mod utils;
mod validator;

// Re-exports
pub use config::{Config, DEFAULT_LABEL_EXPECTED_TYPES, DEFAULT_LABEL_FILE_TYPE_NOT_ALLOWED};
pub use error::{Error, Result};
pub use file::{FileDescriptor, FileReference};
pub use host::{
    AttributeMap, AttributeMapFilter, DefaultUtils, Filter, HookRegistry, HopperItemFilter,
    HostUtils, LoadFileFilter, Query, QueryKey,
};
pub use mime::{group_of, is_accepted, matches_wildcard};
pub use models::{OptionSpec, OptionType, Rejection, Status, TypeLabel};
pub use plugin::{expected_type_labels, expected_types_message, map_attributes, options, Plugin};
pub use validator::{media_type_of, validate_file};
