//! Core type definitions for column configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::render::CellContent;

/// Semantic type tag describing how a column's values should be compared,
/// rendered, and filtered by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    Boolean,
    String,
    #[serde(rename = "string[]")]
    StringList,
    Number,
    Money,
    Percent,
    Date,
    Time,
    Image,
    #[serde(rename = "image[]")]
    ImageList,
    Object,
    #[serde(rename = "object[]")]
    ObjectList,
    /// Unrecognized tag. Takes the string-handling defaults so every column
    /// still ends up with a renderer and filter policy.
    #[serde(other)]
    Other,
}

impl SemanticType {
    /// Returns true if this type orders numerically.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            SemanticType::Number | SemanticType::Money | SemanticType::Percent
        )
    }

    /// Returns true if this type orders as timestamps.
    pub fn is_temporal(&self) -> bool {
        matches!(self, SemanticType::Date | SemanticType::Time)
    }
}

impl Default for SemanticType {
    fn default() -> Self {
        SemanticType::String
    }
}

/// Which edge a pinned column sticks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixedSide {
    Leading,
    Trailing,
}

/// Initial sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascend,
    Descend,
}

/// A value a filter control can select.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    /// Matches every row (boolean radio only).
    All,
    /// Reserved sentinel: the field is absent or empty, as distinct from
    /// any real data value.
    Empty,
    /// A concrete data value.
    Value(Value),
}

impl FilterValue {
    /// Wrap a concrete value.
    pub fn value(v: impl Into<Value>) -> Self {
        FilterValue::Value(v.into())
    }
}

/// One entry in a discrete filter menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    /// The value the predicate receives when this option is selected.
    pub value: FilterValue,
    /// What the menu shows for this option. The empty sentinel shows the
    /// placeholder.
    pub label: CellContent,
}

impl FilterOption {
    pub fn new(value: FilterValue, label: CellContent) -> Self {
        Self { value, label }
    }
}

/// Which filter control the host widget should present for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterUi {
    /// Discrete menu over the column's `filter_options`.
    Menu,
    /// Single-select radio group with its own mutually exclusive choices.
    Radio { choices: Vec<FilterOption> },
    /// Free-text search box with search/clear affordances and a
    /// filled-funnel icon highlighted while a filter is active.
    Search {
        search_text: String,
        clear_text: String,
        active_color: String,
    },
}

impl FilterUi {
    /// The standard search control used by string-ish columns past the
    /// cardinality cutoff.
    pub fn search() -> Self {
        FilterUi::Search {
            search_text: "搜索".to_string(),
            clear_text: "清空".to_string(),
            active_color: "#1890ff".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_type_tags() {
        assert_eq!(
            serde_json::to_string(&SemanticType::StringList).unwrap(),
            "\"string[]\""
        );
        assert_eq!(
            serde_json::from_str::<SemanticType>("\"image[]\"").unwrap(),
            SemanticType::ImageList
        );
        assert_eq!(
            serde_json::from_str::<SemanticType>("\"money\"").unwrap(),
            SemanticType::Money
        );
    }

    #[test]
    fn test_unrecognized_tag_maps_to_other() {
        assert_eq!(
            serde_json::from_str::<SemanticType>("\"uuid\"").unwrap(),
            SemanticType::Other
        );
    }

    #[test]
    fn test_default_is_string() {
        assert_eq!(SemanticType::default(), SemanticType::String);
    }
}
