//! Readable error records.
//!
//! [`ErrorRecord`] is an insertion-ordered mapping: overwriting a key keeps
//! its position, which is what makes layering response fields, body fields
//! and the final `title`/`status`/`message` predictable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the short category label.
pub const TITLE: &str = "title";
/// Key of the numeric HTTP status.
pub const STATUS: &str = "status";
/// Key of the human-readable detail.
pub const MESSAGE: &str = "message";
/// Key of the flattened header mapping.
pub const HEADERS: &str = "headers";

/// Normalized error record: `title`, optional `status`, `message`, plus any
/// response-derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorRecord {
    fields: Map<String, Value>,
}

impl ErrorRecord {
    /// Creates a record with a title and a message, without status.
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::from_fields(Map::new())
            .with(TITLE, Value::String(title.into()))
            .with(MESSAGE, Value::String(message.into()))
    }

    /// Creates a record from pre-existing fields.
    ///
    /// The caller is responsible for setting `title` and `message`.
    #[must_use]
    pub const fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Sets a field, keeping the position of an existing key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Overlays every entry of `other`, later keys winning.
    #[must_use]
    pub fn overlay(mut self, other: Map<String, Value>) -> Self {
        self.fields.extend(other);
        self
    }

    /// Record title.
    ///
    /// Always set by the mappers; empty only for hand-built records.
    #[must_use]
    pub fn title(&self) -> &str {
        self.fields.get(TITLE).and_then(Value::as_str).unwrap_or_default()
    }

    /// HTTP status, when the record came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.fields
            .get(STATUS)
            .and_then(Value::as_u64)
            .and_then(|status| u16::try_from(status).ok())
    }

    /// Returns `true` if the record carries a `status` key, whatever its value.
    #[must_use]
    pub fn has_status(&self) -> bool {
        self.fields.contains_key(STATUS)
    }

    /// Human-readable message.
    ///
    /// `None` when the source did not provide one (JSON bodies without an
    /// `explanation`).
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.fields.get(MESSAGE).and_then(Value::as_str)
    }

    /// Single field by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns `true` if the record has this key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Keys in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no field at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consume into the underlying mapping.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<ErrorRecord> for Value {
    fn from(record: ErrorRecord) -> Self {
        Self::Object(record.fields)
    }
}
