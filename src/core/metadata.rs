//! core::metadata
//!
//! The metadata document: an untyped JSON object with two fields this tool
//! owns.
//!
//! # Schema
//!
//! There is none. Any top-level object is accepted and every key other than
//! `version` and `changelog` passes through untouched. A top level that is
//! not an object is rejected at parse time, before anything is modified.
//!
//! # Example
//!
//! ```
//! use prepare_metadata::core::metadata::MetadataDocument;
//!
//! let mut doc = MetadataDocument::parse(r#"{"name": "Hue", "version": "0.0.0"}"#).unwrap();
//! doc.apply_release("1.2.3", "Fixed bug\n");
//!
//! assert_eq!(doc.version(), Some("1.2.3"));
//! assert_eq!(doc.changelog(), Some("Fixed bug\n"));
//! assert_eq!(doc.get("name"), Some(&serde_json::json!("Hue")));
//! ```

use serde_json::{Map, Value};
use thiserror::Error;

use super::encode;

/// Key holding the release version.
pub const VERSION_KEY: &str = "version";

/// Key holding the release notes.
pub const CHANGELOG_KEY: &str = "changelog";

/// Errors from parsing or serializing a metadata document.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The JSON is valid but its top level is not an object.
    #[error("expected a JSON object at the top level, found {found}")]
    NotAnObject {
        /// Kind of JSON value found instead.
        found: &'static str,
    },

    /// Serialization failed.
    #[error("failed to serialize metadata: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Name of a JSON value's kind, for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A parsed metadata object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetadataDocument {
    fields: Map<String, Value>,
}

impl MetadataDocument {
    /// Parse metadata from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Parse`] for malformed JSON and
    /// [`MetadataError::NotAnObject`] when the top level is not an object.
    pub fn parse(text: &str) -> Result<Self, MetadataError> {
        let value: Value = serde_json::from_str(text).map_err(MetadataError::Parse)?;
        Self::from_value(value)
    }

    /// Wrap an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, MetadataError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(MetadataError::NotAnObject {
                found: kind_of(&other),
            }),
        }
    }

    /// Set the `version` field, creating or overwriting it.
    pub fn set_version(&mut self, version: &str) {
        self.fields
            .insert(VERSION_KEY.to_string(), Value::String(version.to_string()));
    }

    /// Set the `changelog` field, creating or overwriting it.
    pub fn set_changelog(&mut self, changelog: &str) {
        self.fields.insert(
            CHANGELOG_KEY.to_string(),
            Value::String(changelog.to_string()),
        );
    }

    /// Stamp a release into the document.
    pub fn apply_release(&mut self, version: &str, changelog: &str) {
        self.set_version(version);
        self.set_changelog(changelog);
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The `version` field, if it is a string.
    pub fn version(&self) -> Option<&str> {
        self.get(VERSION_KEY).and_then(Value::as_str)
    }

    /// The `changelog` field, if it is a string.
    pub fn changelog(&self) -> Option<&str> {
        self.get(CHANGELOG_KEY).and_then(Value::as_str)
    }

    /// All top-level fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Convert into a plain JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// The stdout representation: the document encoded as JSON, then that
    /// text encoded again as a JSON string.
    pub fn to_log_line(&self) -> Result<String, MetadataError> {
        encode::to_double_encoded(&self.to_value()).map_err(MetadataError::Serialize)
    }

    /// The on-disk representation: 4-space indent, sorted keys.
    pub fn to_pretty(&self) -> Result<String, MetadataError> {
        encode::to_file_json(&self.to_value()).map_err(MetadataError::Serialize)
    }
}
