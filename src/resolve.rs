//! Field value resolution.
//!
//! Resolving a field never fails: a filled field yields its display text, an
//! unset one yields its placeholder label.

use crate::field::Field;
use crate::names::format_names;
use crate::record::{CitationRecord, FieldValue};

/// One resolved field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Display text of a filled field.
    Value(String),
    /// Label of an unset field.
    Placeholder(&'static str),
}

impl Segment {
    /// The text to display for this segment.
    pub fn text(&self) -> &str {
        match self {
            Segment::Value(text) => text,
            Segment::Placeholder(label) => label,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Segment::Placeholder(_))
    }

    pub fn is_filled(&self) -> bool {
        !self.is_placeholder()
    }

    /// The display text if the field was filled.
    pub fn value(&self) -> Option<&str> {
        match self {
            Segment::Value(text) => Some(text),
            Segment::Placeholder(_) => None,
        }
    }
}

/// Resolves one field of a record for display.
///
/// Author and editor lists are joined into prose; text values are trimmed;
/// numbers render in decimal.
pub fn resolve(record: &CitationRecord, field: Field) -> Segment {
    let text = match record.get(field) {
        Some(FieldValue::Text(text)) => text.trim().to_string(),
        Some(FieldValue::Number(number)) => number.to_string(),
        Some(FieldValue::Names(names)) => format_names(names),
        None => String::new(),
    };

    if text.is_empty() {
        Segment::Placeholder(field.placeholder())
    } else {
        Segment::Value(text)
    }
}
