//! Common types used across Holocron
//!
//! A [`Record`] is one item of a paginated collection (a character, a planet,
//! a film). Field values are modelled as a closed set of variants instead of
//! free-form JSON, so every consumer has to say what it does with each shape.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Well-known Fields and Sentinels
// ============================================================================

/// Field holding the canonical identity URL of every record.
pub const IDENTITY_FIELD: &str = "url";

/// Preferred label field.
pub const NAME_FIELD: &str = "name";

/// Fallback label field (films carry a title instead of a name).
pub const TITLE_FIELD: &str = "title";

/// Label substituted for an empty reference list.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Group key used when a record has no value for the grouping field.
pub const UNDEFINED_GROUP: &str = "Undefined";

/// A single field value of a record.
///
/// Deserialization tries the variants in order, so `[]` is an empty
/// [`FieldValue::List`] and `null` is [`FieldValue::Absent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A list of cross-reference URLs, or of labels once resolved
    List(Vec<String>),
    /// Plain text or a single cross-reference URL
    Text(String),
    /// Numeric scalar
    Number(serde_json::Number),
    /// Boolean scalar
    Bool(bool),
    /// Explicit `null`
    Absent,
}

impl FieldValue {
    /// Build a list value from anything string-like
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a text value
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Borrow the text if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True for `Absent` and for an empty list
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Number(_) | FieldValue::Bool(_) => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::List(items) => write!(f, "{}", items.join(", ")),
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Absent => write!(f, "n/a"),
        }
    }
}

/// One item within a collection.
///
/// Serializes as a flat JSON object with the fields in the order the API
/// sent them. Equality ignores field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Get a field as text, if present and textual
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    /// Set a field, returning the previous value
    pub fn insert(&mut self, field: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.fields.insert(field.into(), value)
    }

    /// Builder-style variant of [`Record::insert`]
    pub fn with(mut self, field: impl Into<String>, value: FieldValue) -> Self {
        self.insert(field, value);
        self
    }

    /// The identity URL, if the record carries one
    pub fn identity(&self) -> Option<&str> {
        self.text(IDENTITY_FIELD)
    }

    /// Display label: `name` when present, otherwise `title`
    pub fn label(&self) -> Option<&str> {
        self.text(NAME_FIELD).or_else(|| self.text(TITLE_FIELD))
    }

    /// Iterate fields in insertion order
    pub fn fields(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, FieldValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_deserializes_every_shape() {
        let record: Record = serde_json::from_value(json!({
            "name": "Luke Skywalker",
            "height": "172",
            "films": ["https://swapi.dev/api/films/1/"],
            "species": [],
            "episode_id": 4,
            "homeworld": null,
            "url": "https://swapi.dev/api/people/1/"
        }))
        .unwrap();

        assert_eq!(record.label(), Some("Luke Skywalker"));
        assert_eq!(record.identity(), Some("https://swapi.dev/api/people/1/"));
        assert_eq!(
            record.get("films"),
            Some(&FieldValue::list(["https://swapi.dev/api/films/1/"]))
        );
        assert_eq!(record.get("species"), Some(&FieldValue::List(vec![])));
        assert!(matches!(record.get("episode_id"), Some(FieldValue::Number(_))));
        assert_eq!(record.get("homeworld"), Some(&FieldValue::Absent));
    }

    #[test]
    fn test_label_falls_back_to_title() {
        let film = Record::new()
            .with("title", FieldValue::text("A New Hope"))
            .with("url", FieldValue::text("https://swapi.dev/api/films/1/"));
        assert_eq!(film.label(), Some("A New Hope"));

        let nameless = Record::new().with("url", FieldValue::text("x"));
        assert_eq!(nameless.label(), None);
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = Record::new()
            .with("name", FieldValue::text("R2-D2"))
            .with("species", FieldValue::list(["Droid"]));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"name": "R2-D2", "species": ["Droid"]}));
    }

    #[test]
    fn test_record_keeps_api_field_order() {
        let body = r#"{"name":"Luke Skywalker","height":"172","mass":"77","films":[],"url":"https://swapi.dev/api/people/1/"}"#;
        let record: Record = serde_json::from_str(body).unwrap();

        let names: Vec<&str> = record.fields().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["name", "height", "mass", "films", "url"]);
        assert_eq!(serde_json::to_string(&record).unwrap(), body);
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::list(["A", "B"]).to_string(), "A, B");
        assert_eq!(FieldValue::text("blue").to_string(), "blue");
        assert_eq!(FieldValue::Absent.to_string(), "n/a");
    }

    #[test]
    fn test_is_empty() {
        assert!(FieldValue::Absent.is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(!FieldValue::list([UNKNOWN_LABEL]).is_empty());
        assert!(!FieldValue::Bool(false).is_empty());
    }
}
