use crate::config::{
    label_map_from_value, AcceptedTypes, DEFAULT_LABEL_EXPECTED_TYPES,
    DEFAULT_LABEL_FILE_TYPE_NOT_ALLOWED,
};
use crate::file::FileReference;
use crate::host::{AttributeMap, DefaultUtils, Filter, HookRegistry, HostUtils, Query, QueryKey};
use crate::models::{OptionSpec, OptionType, Rejection, Status, TypeLabel};
use crate::validator::validate_file;
use futures::future::{self, BoxFuture, FutureExt};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// File type validation plugin for the upload widget
#[derive(Debug, Clone, Default)]
pub struct Plugin<U = DefaultUtils> {
    utils: U,
}

impl Plugin<DefaultUtils> {
    /// Create a plugin using the built-in MIME table and URL parsing
    pub fn new() -> Self {
        Self::default()
    }
}

impl<U: HostUtils + 'static> Plugin<U> {
    /// Create a plugin on top of host provided utilities
    pub fn with_utils(utils: U) -> Self {
        Self { utils }
    }

    /// Install the plugin's filters and return its options
    pub fn register<R: HookRegistry + ?Sized>(
        self: Arc<Self>,
        registry: &mut R,
    ) -> Vec<OptionSpec> {
        registry.add_filter(Filter::SetAttributeToOptionMap(Box::new(map_attributes)));

        let plugin = Arc::clone(&self);
        registry.add_filter(Filter::AllowHopperItem(Box::new(
            move |file: &FileReference, query: &dyn Query| {
                plugin.allow_hopper_item(file, query)
            },
        )));

        registry.add_filter(Filter::LoadFile(Box::new(
            move |file: FileReference, query: &dyn Query| self.load_file(file, query),
        )));

        debug!("Registered file type validation filters");
        options()
    }

    /// Whether a file may enter the hopper
    pub fn allow_hopper_item(&self, file: &FileReference, query: &dyn Query) -> bool {
        if !query_or(query, QueryKey::AllowFileTypeValidation, true) {
            return true;
        }

        validate_file(file, &accepted_file_types(query), &self.utils)
    }

    /// Check a file right before it is set to the item state.
    ///
    /// Resolves with the file itself, or with a [`Rejection`] naming the expected types.
    pub fn load_file(
        &self,
        file: FileReference,
        query: &dyn Query,
    ) -> BoxFuture<'static, Result<FileReference, Rejection>> {
        future::ready(self.check_file(file, query)).boxed()
    }

    /// Synchronous form of [`Plugin::load_file`].
    ///
    /// The [`Rejection`] converts into [`Error::FileTypeNotAllowed`](crate::Error::FileTypeNotAllowed),
    /// so callers working in [`crate::Result`] can propagate it with `?`.
    pub fn check_file(
        &self,
        file: FileReference,
        query: &dyn Query,
    ) -> Result<FileReference, Rejection> {
        if !query_or(query, QueryKey::AllowFileTypeValidation, true) {
            return Ok(file);
        }

        let accepted = accepted_file_types(query);
        if validate_file(&file, &accepted, &self.utils) {
            return Ok(file);
        }

        let main: String = query_or(
            query,
            QueryKey::LabelFileTypeNotAllowed,
            DEFAULT_LABEL_FILE_TYPE_NOT_ALLOWED.to_string(),
        );
        let template: String = query_or(
            query,
            QueryKey::LabelExpectedTypes,
            DEFAULT_LABEL_EXPECTED_TYPES.to_string(),
        );
        let labels = query
            .query(QueryKey::LabelExpectedTypesMap)
            .and_then(label_map_from_value);

        let sub = expected_types_message(&self.utils, &template, &accepted, labels.as_ref());
        debug!("Rejected file {file:?}: {sub}");

        Err(Rejection {
            status: Status { main, sub },
        })
    }
}

/// Map the `accept` attribute onto the `acceptedFileTypes` option
pub fn map_attributes(mut map: AttributeMap) -> AttributeMap {
    map.insert(
        "accept".to_string(),
        QueryKey::AcceptedFileTypes.option_name().to_string(),
    );
    map
}

/// Options published to the host, with their defaults and types
pub fn options() -> Vec<OptionSpec> {
    QueryKey::ALL
        .iter()
        .map(|key| {
            let (default, kind) = match key {
                QueryKey::AllowFileTypeValidation => (json!(true), OptionType::Boolean),
                QueryKey::AcceptedFileTypes => (json!([]), OptionType::Array),
                QueryKey::LabelFileTypeNotAllowed => {
                    (json!(DEFAULT_LABEL_FILE_TYPE_NOT_ALLOWED), OptionType::String)
                }
                QueryKey::LabelExpectedTypes => {
                    (json!(DEFAULT_LABEL_EXPECTED_TYPES), OptionType::String)
                }
                QueryKey::LabelExpectedTypesMap => (json!({}), OptionType::Object),
            };
            OptionSpec {
                name: key.option_name(),
                default,
                kind,
            }
        })
        .collect()
}

/// Labels of the accepted types as shown to the user.
///
/// Patterns are relabeled or hidden through `labels`, in their configured order.
pub fn expected_type_labels<'a>(
    accepted_file_types: &'a [String],
    labels: Option<&'a HashMap<String, TypeLabel>>,
) -> Vec<&'a str> {
    let mut shown: Vec<&str> = Vec::with_capacity(accepted_file_types.len());
    for pattern in accepted_file_types {
        let label = match labels.and_then(|labels| labels.get(pattern)) {
            Some(TypeLabel::Hidden) => continue,
            Some(TypeLabel::Label(label)) => label.as_str(),
            Some(TypeLabel::Unchanged) | None => pattern.as_str(),
        };
        shown.push(label);
    }
    shown
}

/// Fill the expected types template with `allTypes`, `allButLastType` and `lastType`
pub fn expected_types_message(
    utils: &dyn HostUtils,
    template: &str,
    accepted_file_types: &[String],
    labels: Option<&HashMap<String, TypeLabel>>,
) -> String {
    let shown = expected_type_labels(accepted_file_types, labels);
    let (last_type, all_but_last_type) = match shown.split_last() {
        Some((last, rest)) => (*last, rest.join(", ")),
        None => ("", String::new()),
    };
    let all_types = shown.join(", ");

    utils.interpolate(
        template,
        &[
            ("allTypes", all_types.as_str()),
            ("allButLastType", all_but_last_type.as_str()),
            ("lastType", last_type),
        ],
    )
}

fn accepted_file_types(query: &dyn Query) -> Vec<String> {
    query_or(
        query,
        QueryKey::AcceptedFileTypes,
        AcceptedTypes::List(Vec::new()),
    )
    .into_vec()
}

/// Read a query value, falling back to `default` when unset or of the wrong shape
fn query_or<T: DeserializeOwned>(query: &dyn Query, key: QueryKey, default: T) -> T {
    match query.query(key) {
        None | Some(Value::Null) => default,
        Some(value) => serde_json::from_value(value).unwrap_or_else(|err| {
            warn!("Ignoring invalid value for {key}: {err}");
            default
        }),
    }
}
