//! Citation record loading.
//!
//! Handles loading citations from JSON files, supporting both
//! standard JSON arrays and JSONL format (one JSON object per line).

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::assemble::{format_citation, RenderMode};
use crate::record::CitationRecord;

/// Errors that can occur when loading citations.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid JSONL at line {line}: {message}")]
    Jsonl { line: usize, message: String },

    #[error("Citations must be a JSON array")]
    NotAnArray,

    #[error("Citation at index {index} is not a JSON object")]
    NotAnObject { index: usize },
}

/// One stored citation: its identifier, type tag and field values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitationEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub citation_type: String,
    #[serde(flatten)]
    pub record: CitationRecord,
}

impl CitationEntry {
    /// Builds an entry from one JSON object.
    ///
    /// The type is read from `type`, falling back to `citation_type`. A
    /// missing type leaves the tag empty.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let id = object.get("id").and_then(|id| match id {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });
        let citation_type = ["type", "citation_type"]
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str))
            .unwrap_or_default()
            .trim()
            .to_string();

        CitationEntry {
            id,
            citation_type,
            record: CitationRecord::from_json_map(object),
        }
    }

    /// Formats this entry's record as its own type.
    pub fn format(&self, mode: RenderMode) -> String {
        format_citation(&self.citation_type, &self.record, mode)
    }
}

/// Loads citations from a JSON array or JSONL file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold citation
/// objects.
pub fn load_records(path: &Path) -> Result<Vec<CitationEntry>, InputError> {
    let content = fs::read_to_string(path)?;
    parse_records(&content)
}

/// Parses citations from in-memory JSON array or JSONL content.
///
/// Supports two input formats:
/// - JSON array: `[{"id": "1", "type": "book", ...}, ...]`
/// - JSONL: `{"id": "1", "type": "book", ...}\n{"id": "2", ...}`
pub fn parse_records(content: &str) -> Result<Vec<CitationEntry>, InputError> {
    let trimmed = content.trim();

    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let values: Vec<Value> = if trimmed.starts_with('[') {
        match serde_json::from_str::<Value>(trimmed)? {
            Value::Array(items) => items,
            _ => return Err(InputError::NotAnArray),
        }
    } else if trimmed.starts_with('{') || trimmed.lines().count() > 1 {
        parse_jsonl(content)?
    } else {
        // A lone scalar is valid JSON but not a citation list.
        serde_json::from_str::<Value>(trimmed)?;
        return Err(InputError::NotAnArray);
    };

    values
        .iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Object(object) => Ok(CitationEntry::from_object(object)),
            _ => Err(InputError::NotAnObject { index }),
        })
        .collect()
}

fn parse_jsonl(content: &str) -> Result<Vec<Value>, InputError> {
    let mut values = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(value) => values.push(value),
            Err(e) => {
                return Err(InputError::Jsonl {
                    line: line_num + 1,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(values)
}
