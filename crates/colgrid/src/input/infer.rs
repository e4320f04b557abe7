//! Descriptor inference for datasets without an explicit column spec.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::row::Row;
use crate::schema::{ColumnDescriptor, SemanticType};

// Date shapes compiled once on first use.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap(),
        Regex::new(r"^\d{4}/\d{2}/\d{2}$").unwrap(),
    ]
});

static DATETIME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}[ T]\d{2}:\d{2}").unwrap(),
        Regex::new(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}").unwrap(),
    ]
});

/// Synthesize column descriptors from the data itself: one descriptor per
/// key (first-seen order across all rows), tagged with the semantic type
/// every non-missing value of the column agrees on, falling back to string.
pub fn infer_columns(rows: &[Row]) -> Vec<ColumnDescriptor> {
    let mut keys: IndexSet<String> = IndexSet::new();
    for row in rows {
        for (key, _) in row.iter() {
            keys.insert(key.to_string());
        }
    }

    keys.into_iter()
        .map(|key| {
            let ty = infer_type(rows, &key);
            ColumnDescriptor::new(&key).with_type(ty)
        })
        .collect()
}

fn infer_type(rows: &[Row], key: &str) -> SemanticType {
    let mut seen = None;
    for row in rows {
        let value = match row.get(key) {
            None | Some(Value::Null) => continue,
            Some(v) => v,
        };
        let ty = value_type(value);
        match seen {
            None => seen = Some(ty),
            Some(prev) if prev == ty => {}
            // Date narrows into time when both shapes appear.
            Some(SemanticType::Date) if ty == SemanticType::Time => {
                seen = Some(SemanticType::Time)
            }
            Some(SemanticType::Time) if ty == SemanticType::Date => {}
            Some(_) => return SemanticType::String,
        }
    }
    seen.unwrap_or(SemanticType::String)
}

fn value_type(value: &Value) -> SemanticType {
    match value {
        Value::Bool(_) => SemanticType::Boolean,
        Value::Number(_) => SemanticType::Number,
        Value::String(s) => {
            let trimmed = s.trim();
            if DATETIME_PATTERNS.iter().any(|p| p.is_match(trimmed)) {
                SemanticType::Time
            } else if DATE_PATTERNS.iter().any(|p| p.is_match(trimmed)) {
                SemanticType::Date
            } else {
                SemanticType::String
            }
        }
        Value::Array(items) => {
            if items.iter().all(|v| matches!(v, Value::String(_))) {
                SemanticType::StringList
            } else {
                SemanticType::ObjectList
            }
        }
        Value::Object(_) => SemanticType::Object,
        Value::Null => SemanticType::String,
    }
}
