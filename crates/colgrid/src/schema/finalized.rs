//! Fully populated column configuration, ready for the rendering widget.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::{FilterPredicate, Renderer, Sorter};

use super::types::{FilterOption, FilterUi, FixedSide, SemanticType, SortOrder};

/// A column descriptor after default synthesis: every applicable field is
/// populated, either from the caller's descriptor or from the type-derived
/// defaults. Leaf columns always carry a renderer; group headers carry only
/// layout fields and their processed children.
#[derive(Clone)]
pub struct FinalizedColumn {
    pub key: String,
    /// Always equal to `key`; the index into a row's cells.
    pub data_index: String,
    pub title: String,
    pub semantic_type: SemanticType,
    pub width: u32,
    pub fixed: Option<FixedSide>,
    pub default_sort_order: Option<SortOrder>,
    pub render: Option<Renderer>,
    pub sorter: Option<Sorter>,
    pub filter_options: Option<Vec<FilterOption>>,
    pub filter_ui: Option<FilterUi>,
    pub on_filter: Option<FilterPredicate>,
    pub children: Vec<FinalizedColumn>,
}

impl FinalizedColumn {
    /// Whether this is a grouped column (a header over nested columns).
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Serializable projection without the behavior closures.
    pub fn summary(&self) -> ColumnSummary {
        let filter = match (&self.filter_ui, &self.filter_options) {
            (Some(FilterUi::Search { .. }), _) => FilterKind::Search,
            (Some(FilterUi::Radio { .. }), _) => FilterKind::Radio,
            (Some(FilterUi::Menu), _) | (None, Some(_)) => FilterKind::Menu,
            (None, None) => FilterKind::None,
        };
        ColumnSummary {
            key: self.key.clone(),
            title: self.title.clone(),
            semantic_type: self.semantic_type,
            width: self.width,
            fixed: self.fixed,
            sortable: self.sorter.is_some(),
            filter,
            filter_option_count: self.filter_options.as_ref().map(|opts| opts.len()),
            children: self.children.iter().map(|c| c.summary()).collect(),
        }
    }
}

impl fmt::Debug for FinalizedColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinalizedColumn")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("semantic_type", &self.semantic_type)
            .field("width", &self.width)
            .field("fixed", &self.fixed)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .field("sorter", &self.sorter.as_ref().map(|_| "<fn>"))
            .field("filter_options", &self.filter_options)
            .field("filter_ui", &self.filter_ui)
            .field("on_filter", &self.on_filter.as_ref().map(|_| "<fn>"))
            .field("children", &self.children)
            .finish()
    }
}

/// Which filter control a finalized column ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    None,
    Menu,
    Radio,
    Search,
}

/// Serializable view of a finalized column, for diagnostics and the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub key: String,
    pub title: String,
    pub semantic_type: SemanticType,
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<FixedSide>,
    pub sortable: bool,
    pub filter: FilterKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_option_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ColumnSummary>,
}
