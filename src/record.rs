//! Citation records.
//!
//! A record is a flat map from field to value. No field is required at this
//! level; each citation variant decides which fields it reads. Shape problems
//! are normalised here, at the boundary, so the assemblers never branch on
//! the raw JSON shape.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::field::Field;

/// The value held by one field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// An integer value such as a year or a page number.
    Number(i64),
    /// An ordered list of person names (authors or editors only).
    Names(Vec<String>),
}

impl FieldValue {
    /// Normalises a JSON value for the given field.
    ///
    /// Returns `None` for unset or wrong-shaped values.
    pub fn from_json(field: Field, value: &Value) -> Option<FieldValue> {
        if field.is_name_list() {
            let names: Vec<String> = match value {
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect(),
                Value::String(single) if !single.trim().is_empty() => {
                    vec![single.trim().to_string()]
                }
                Value::Number(number) => vec![number.to_string()],
                _ => Vec::new(),
            };
            return (!names.is_empty()).then_some(FieldValue::Names(names));
        }

        match value {
            Value::String(text) if !text.trim().is_empty() => Some(FieldValue::Text(text.clone())),
            Value::Number(number) => integral(number).map(FieldValue::Number),
            _ => None,
        }
    }

    /// Returns true if the value carries nothing worth rendering.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Number(_) => false,
            FieldValue::Names(names) => names.iter().all(|n| n.trim().is_empty()),
        }
    }

    fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::Number(number) => Value::from(*number),
            FieldValue::Names(names) => Value::from(names.clone()),
        }
    }
}

/// An integer, or a float with no fractional part such as `1914.0`.
fn integral(number: &serde_json::Number) -> Option<i64> {
    if let Some(value) = number.as_i64() {
        return Some(value);
    }
    let value = number.as_f64()?;
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then_some(value as i64)
}

/// A tag attached to a citation by the surrounding application.
///
/// Tags travel with the record but never influence the formatted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A single citation's field values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct CitationRecord {
    fields: BTreeMap<Field, FieldValue>,
    tags: Vec<TagRef>,
}

/// Keys that belong to the stored citation rather than to its fields.
const METADATA_KEYS: &[&str] = &[
    "id",
    "type",
    "citation_type",
    "project_id",
    "source",
    "notes",
    "order",
    "formatted_citation",
    "created_at",
    "updated_at",
];

impl CitationRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a JSON object, normalising every value.
    ///
    /// Canonical field names take precedence over their legacy aliases.
    pub fn from_json_map(map: &Map<String, Value>) -> Self {
        let mut record = CitationRecord::new();

        // Canonical names first, so an alias never overwrites them.
        let (aliases, canonical): (Vec<_>, Vec<_>) =
            map.iter().partition(|(key, _)| Field::is_alias(key));

        for (key, value) in canonical.into_iter().chain(aliases) {
            if key == "tags" {
                record.tags = parse_tags(value);
                continue;
            }
            let Some(field) = Field::from_name(key) else {
                if !METADATA_KEYS.contains(&key.as_str()) {
                    debug!(key = %key, "ignoring unknown citation key");
                }
                continue;
            };
            if record.fields.contains_key(&field) {
                continue;
            }
            match FieldValue::from_json(field, value) {
                Some(normalised) => {
                    record.fields.insert(field, normalised);
                }
                None if !value.is_null() => {
                    debug!(field = %field, "treating wrong-shaped value as absent");
                }
                None => {}
            }
        }

        record
    }

    /// Sets a text field, replacing any previous value.
    ///
    /// Setting `authors` or `editors` this way stores a one-element list.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.fields.remove(&field);
        } else if field.is_name_list() {
            self.fields
                .insert(field, FieldValue::Names(vec![value.trim().to_string()]));
        } else {
            self.fields.insert(field, FieldValue::Text(value));
        }
    }

    /// Sets an integer field such as a year.
    pub fn set_number(&mut self, field: Field, value: i64) {
        if field.is_name_list() {
            self.set(field, value.to_string());
        } else {
            self.fields.insert(field, FieldValue::Number(value));
        }
    }

    /// Replaces a name list. Blank names are dropped; an empty list unsets it.
    pub fn set_names<I, S>(&mut self, field: Field, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            self.fields.remove(&field);
        } else if field.is_name_list() {
            self.fields.insert(field, FieldValue::Names(names));
        } else {
            self.fields.insert(field, FieldValue::Text(names.join(", ")));
        }
    }

    /// Builder form of [`CitationRecord::set`].
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Builder form of [`CitationRecord::set_number`].
    #[must_use]
    pub fn with_number(mut self, field: Field, value: i64) -> Self {
        self.set_number(field, value);
        self
    }

    /// Builder form of [`CitationRecord::set_names`].
    #[must_use]
    pub fn with_names<I, S>(mut self, field: Field, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_names(field, names);
        self
    }

    /// Removes a field.
    pub fn clear(&mut self, field: Field) {
        self.fields.remove(&field);
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.fields.get(&field).filter(|value| !value.is_empty())
    }

    /// The names stored in a list field, or an empty slice.
    pub fn names(&self, field: Field) -> &[String] {
        match self.get(field) {
            Some(FieldValue::Names(names)) => names,
            _ => &[],
        }
    }

    pub fn tags(&self) -> &[TagRef] {
        &self.tags
    }

    pub fn set_tags(&mut self, tags: Vec<TagRef>) {
        self.tags = tags;
    }

    /// Returns true if no field holds a value.
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(FieldValue::is_empty)
    }

    /// Iterates over the set fields in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.fields
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| (*field, value))
    }
}

impl From<Map<String, Value>> for CitationRecord {
    fn from(map: Map<String, Value>) -> Self {
        CitationRecord::from_json_map(&map)
    }
}

impl Serialize for CitationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tag_count = usize::from(!self.tags.is_empty());
        let mut map = serializer.serialize_map(Some(self.fields.len() + tag_count))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.as_str(), &value.to_json())?;
        }
        if !self.tags.is_empty() {
            map.serialize_entry("tags", &self.tags)?;
        }
        map.end()
    }
}

fn parse_tags(value: &Value) -> Vec<TagRef> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(name) => Some(TagRef {
                id: None,
                name: name.clone(),
                color: None,
            }),
            other => serde_json::from_value(other.clone()).ok(),
        })
        .collect()
}
