//! The surface the host widget exposes to plugins: filter registration,
//! configuration queries and string utilities.

use crate::file::FileReference;
use crate::models::Rejection;
use crate::utils;
use futures::future::BoxFuture;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Configuration keys the plugin reads from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    AllowFileTypeValidation,
    AcceptedFileTypes,
    LabelFileTypeNotAllowed,
    LabelExpectedTypes,
    LabelExpectedTypesMap,
}

impl QueryKey {
    pub const ALL: [QueryKey; 5] = [
        QueryKey::AllowFileTypeValidation,
        QueryKey::AcceptedFileTypes,
        QueryKey::LabelFileTypeNotAllowed,
        QueryKey::LabelExpectedTypes,
        QueryKey::LabelExpectedTypesMap,
    ];

    /// Name of the host query, e.g. `GET_ACCEPTED_FILE_TYPES`
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::AllowFileTypeValidation => "GET_ALLOW_FILE_TYPE_VALIDATION",
            QueryKey::AcceptedFileTypes => "GET_ACCEPTED_FILE_TYPES",
            QueryKey::LabelFileTypeNotAllowed => "GET_LABEL_FILE_TYPE_NOT_ALLOWED",
            QueryKey::LabelExpectedTypes => "GET_FILE_VALIDATE_TYPE_LABEL_EXPECTED_TYPES",
            QueryKey::LabelExpectedTypesMap => "GET_FILE_VALIDATE_TYPE_LABEL_EXPECTED_TYPES_MAP",
        }
    }

    /// Name of the option backing this query, e.g. `acceptedFileTypes`
    pub fn option_name(&self) -> &'static str {
        match self {
            QueryKey::AllowFileTypeValidation => "allowFileTypeValidation",
            QueryKey::AcceptedFileTypes => "acceptedFileTypes",
            QueryKey::LabelFileTypeNotAllowed => "labelFileTypeNotAllowed",
            QueryKey::LabelExpectedTypes => "fileValidateTypeLabelExpectedTypes",
            QueryKey::LabelExpectedTypesMap => "fileValidateTypeLabelExpectedTypesMap",
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves configuration values by key. `None` means the option is not set.
pub trait Query {
    fn query(&self, key: QueryKey) -> Option<Value>;
}

impl<F> Query for F
where
    F: Fn(QueryKey) -> Option<Value>,
{
    fn query(&self, key: QueryKey) -> Option<Value> {
        self(key)
    }
}

/// String utilities provided by the host
pub trait HostUtils: Send + Sync {
    fn filename_from_url(&self, url: &str) -> String;

    fn extension_from_filename(&self, filename: &str) -> Option<String>;

    /// Media type for an extension, empty when unknown
    fn guess_mime_type(&self, extension: &str) -> String;

    fn interpolate(&self, template: &str, replacements: &[(&str, &str)]) -> String;
}

/// Utilities backed by the `mime_guess` table and `url` parsing
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultUtils;

impl HostUtils for DefaultUtils {
    fn filename_from_url(&self, url: &str) -> String {
        utils::filename_from_url(url)
    }

    fn extension_from_filename(&self, filename: &str) -> Option<String> {
        utils::extension_from_filename(filename)
    }

    fn guess_mime_type(&self, extension: &str) -> String {
        utils::guess_mime_type(extension)
    }

    fn interpolate(&self, template: &str, replacements: &[(&str, &str)]) -> String {
        utils::replace_in_string(template, replacements)
    }
}

/// Host attribute name -> option name, e.g. `accept` -> `acceptedFileTypes`
pub type AttributeMap = HashMap<String, String>;

pub type AttributeMapFilter = Box<dyn Fn(AttributeMap) -> AttributeMap + Send + Sync>;

pub type HopperItemFilter = Box<dyn Fn(&FileReference, &dyn Query) -> bool + Send + Sync>;

pub type LoadFileFilter = Box<
    dyn Fn(FileReference, &dyn Query) -> BoxFuture<'static, Result<FileReference, Rejection>>
        + Send
        + Sync,
>;

/// A filter callback, tagged with the host hook it attaches to
pub enum Filter {
    /// `SET_ATTRIBUTE_TO_OPTION_MAP`
    SetAttributeToOptionMap(AttributeMapFilter),

    /// `ALLOW_HOPPER_ITEM`
    AllowHopperItem(HopperItemFilter),

    /// `LOAD_FILE`
    LoadFile(LoadFileFilter),
}

impl Filter {
    pub fn name(&self) -> &'static str {
        match self {
            Filter::SetAttributeToOptionMap(_) => "SET_ATTRIBUTE_TO_OPTION_MAP",
            Filter::AllowHopperItem(_) => "ALLOW_HOPPER_ITEM",
            Filter::LoadFile(_) => "LOAD_FILE",
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Filter").field(&self.name()).finish()
    }
}

/// Host side filter registration
pub trait HookRegistry {
    fn add_filter(&mut self, filter: Filter);
}

impl HookRegistry for Vec<Filter> {
    fn add_filter(&mut self, filter: Filter) {
        self.push(filter);
    }
}
