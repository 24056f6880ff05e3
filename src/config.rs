use crate::error::{Error, Result};
use crate::host::{Query, QueryKey};
use crate::models::TypeLabel;
use crate::utils::parse_accepted_types;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Default main message of a rejection
pub const DEFAULT_LABEL_FILE_TYPE_NOT_ALLOWED: &str = "File is of invalid type";

/// Default sub message template of a rejection
pub const DEFAULT_LABEL_EXPECTED_TYPES: &str = "Expects {allButLastType} or {lastType}";

/// Configuration for the file type validation plugin
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Enable or disable file type validation
    pub allow_file_type_validation: bool,

    /// Media types or wildcard groups to accept, e.g. `image/png` or `image/*`.
    /// Also accepts a comma separated string, as set through an `accept` attribute.
    #[serde(deserialize_with = "deserialize_accepted_types")]
    pub accepted_file_types: Vec<String>,

    /// Main message when a file is rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_file_type_not_allowed: Option<String>,

    /// Template of the expected types message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_validate_type_label_expected_types: Option<String>,

    /// Labels replacing or hiding accepted types in the expected types message
    #[serde(
        deserialize_with = "deserialize_label_map",
        skip_serializing_if = "Option::is_none"
    )]
    pub file_validate_type_label_expected_types_map: Option<HashMap<String, TypeLabel>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_file_type_validation: true,
            accepted_file_types: Vec::new(),
            label_file_type_not_allowed: None,
            file_validate_type_label_expected_types: None,
            file_validate_type_label_expected_types_map: None,
        }
    }
}

impl Config {
    /// Parse and validate a configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from a JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        let config: Config = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(pattern) = self
            .accepted_file_types
            .iter()
            .find(|pattern| pattern.trim().is_empty())
        {
            return Err(Error::InvalidConfig(format!(
                "Accepted file type cannot be empty: {pattern:?}"
            )));
        }

        Ok(())
    }

    /// Get the main rejection message, falling back to the default if not set
    pub fn get_label_file_type_not_allowed(&self) -> String {
        self.label_file_type_not_allowed
            .clone()
            .unwrap_or_else(|| DEFAULT_LABEL_FILE_TYPE_NOT_ALLOWED.to_string())
    }

    /// Get the expected types template, falling back to the default if not set
    pub fn get_label_expected_types(&self) -> String {
        self.file_validate_type_label_expected_types
            .clone()
            .unwrap_or_else(|| DEFAULT_LABEL_EXPECTED_TYPES.to_string())
    }
}

impl Query for Config {
    fn query(&self, key: QueryKey) -> Option<Value> {
        match key {
            QueryKey::AllowFileTypeValidation => {
                Some(Value::Bool(self.allow_file_type_validation))
            }
            QueryKey::AcceptedFileTypes => Some(Value::from(self.accepted_file_types.clone())),
            QueryKey::LabelFileTypeNotAllowed => {
                Some(Value::String(self.get_label_file_type_not_allowed()))
            }
            QueryKey::LabelExpectedTypes => Some(Value::String(self.get_label_expected_types())),
            QueryKey::LabelExpectedTypesMap => self
                .file_validate_type_label_expected_types_map
                .as_ref()
                .map(|labels| {
                    Value::Object(
                        labels
                            .iter()
                            .map(|(pattern, label)| (pattern.clone(), label.clone().into()))
                            .collect(),
                    )
                }),
        }
    }
}

/// Accepted types as hosts hand them over: a list, or a comma separated string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum AcceptedTypes {
    List(Vec<String>),
    Joined(String),
}

impl AcceptedTypes {
    pub(crate) fn into_vec(self) -> Vec<String> {
        match self {
            AcceptedTypes::List(types) => types,
            AcceptedTypes::Joined(types) => parse_accepted_types(&types),
        }
    }
}

/// Read a label map; anything but an object (`false`, `null`) means no map
pub(crate) fn label_map_from_value(value: Value) -> Option<HashMap<String, TypeLabel>> {
    match value {
        Value::Object(labels) => Some(
            labels
                .into_iter()
                .map(|(pattern, label)| (pattern, TypeLabel::from(label)))
                .collect(),
        ),
        _ => None,
    }
}

fn deserialize_accepted_types<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(AcceptedTypes::deserialize(deserializer)?.into_vec())
}

fn deserialize_label_map<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<HashMap<String, TypeLabel>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(label_map_from_value(Value::deserialize(deserializer)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepted_types_from_joined_string() {
        let config = Config::from_value(json!({
            "acceptedFileTypes": "image/png, image/jpeg ,,video/*"
        }))
        .unwrap();

        assert_eq!(
            config.accepted_file_types,
            vec!["image/png", "image/jpeg", "video/*"]
        );
    }

    #[test]
    fn test_label_map_false_means_absent() {
        let config = Config::from_value(json!({
            "fileValidateTypeLabelExpectedTypesMap": false
        }))
        .unwrap();

        assert_eq!(config.file_validate_type_label_expected_types_map, None);
        assert_eq!(config.query(QueryKey::LabelExpectedTypesMap), None);
    }

    #[test]
    fn test_label_map_round_trips_through_query() {
        let config = Config::from_value(json!({
            "fileValidateTypeLabelExpectedTypesMap": {
                "image/png": "PNG",
                "image/gif": false
            }
        }))
        .unwrap();

        let value = config.query(QueryKey::LabelExpectedTypesMap).unwrap();
        assert_eq!(value["image/png"], "PNG");
        assert_eq!(value["image/gif"], false);
    }

    #[test]
    fn test_query_defaults() {
        let config = Config::default();

        assert_eq!(
            config.query(QueryKey::AllowFileTypeValidation),
            Some(json!(true))
        );
        assert_eq!(config.query(QueryKey::AcceptedFileTypes), Some(json!([])));
        assert_eq!(
            config.query(QueryKey::LabelFileTypeNotAllowed),
            Some(json!("File is of invalid type"))
        );
        assert_eq!(
            config.query(QueryKey::LabelExpectedTypes),
            Some(json!("Expects {allButLastType} or {lastType}"))
        );
    }
}
