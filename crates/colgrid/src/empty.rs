//! Placeholder rendering for empty values.

use serde_json::Value;

use crate::render::CellContent;
use crate::row::{display_value, is_empty_value};

/// Default placeholder glyph.
pub const PLACEHOLDER_TEXT: &str = "空";

/// Render a value through the empty-value placeholder.
///
/// Nullish values, empty strings, and empty lists produce a disabled
/// placeholder labeled `text` (default [`PLACEHOLDER_TEXT`]); anything else
/// passes through as its display text.
pub fn placeholder(value: Option<&Value>, text: Option<&str>) -> CellContent {
    match value {
        Some(v) if !is_empty_value(Some(v)) => CellContent::text(display_value(v)),
        _ => CellContent::Placeholder {
            text: text.unwrap_or(PLACEHOLDER_TEXT).to_string(),
        },
    }
}

/// The placeholder with the default glyph, independent of any value.
pub fn placeholder_cell() -> CellContent {
    CellContent::Placeholder {
        text: PLACEHOLDER_TEXT.to_string(),
    }
}
