//! Caller-facing column descriptor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::{FilterPredicate, Renderer, Sorter};

use super::types::{FilterOption, FilterUi, FixedSide, SemanticType, SortOrder};

/// A minimal column description supplied by the caller.
///
/// Only `key` is required; every other field is synthesized from the
/// semantic type and the dataset when absent. Fields that are present are
/// immutable inputs: processing never replaces them.
///
/// Descriptors deserialize from JSON (the behavior overrides are
/// code-only and set through the builder methods).
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Unique among siblings; doubles as the data index into a row.
    pub key: String,
    /// Header text. Defaults to `key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Semantic type tag. Defaults to `string`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub semantic_type: Option<SemanticType>,
    /// Column width. Defaults through the table-level default chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Pin the column to an edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<FixedSide>,
    /// Initial sort direction, passed through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort_order: Option<SortOrder>,
    /// Nested descriptors for a grouped column.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ColumnDescriptor>,
    /// Explicit discrete filter menu entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_options: Option<Vec<FilterOption>>,
    /// Explicit filter control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_ui: Option<FilterUi>,
    /// Explicit cell renderer.
    #[serde(skip)]
    pub render: Option<Renderer>,
    /// Explicit sort comparator.
    #[serde(skip)]
    pub sorter: Option<Sorter>,
    /// Explicit filter predicate.
    #[serde(skip)]
    pub on_filter: Option<FilterPredicate>,
}

impl ColumnDescriptor {
    /// Create a descriptor with just a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_type(mut self, semantic_type: SemanticType) -> Self {
        self.semantic_type = Some(semantic_type);
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_fixed(mut self, fixed: FixedSide) -> Self {
        self.fixed = Some(fixed);
        self
    }

    pub fn with_default_sort_order(mut self, order: SortOrder) -> Self {
        self.default_sort_order = Some(order);
        self
    }

    pub fn with_children(mut self, children: Vec<ColumnDescriptor>) -> Self {
        self.children = children;
        self
    }

    pub fn with_filter_options(mut self, options: Vec<FilterOption>) -> Self {
        self.filter_options = Some(options);
        self
    }

    pub fn with_filter_ui(mut self, ui: FilterUi) -> Self {
        self.filter_ui = Some(ui);
        self
    }

    pub fn with_render(mut self, render: Renderer) -> Self {
        self.render = Some(render);
        self
    }

    pub fn with_sorter(mut self, sorter: Sorter) -> Self {
        self.sorter = Some(sorter);
        self
    }

    pub fn with_on_filter(mut self, on_filter: FilterPredicate) -> Self {
        self.on_filter = Some(on_filter);
        self
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("semantic_type", &self.semantic_type)
            .field("width", &self.width)
            .field("fixed", &self.fixed)
            .field("default_sort_order", &self.default_sort_order)
            .field("children", &self.children)
            .field("filter_options", &self.filter_options)
            .field("filter_ui", &self.filter_ui)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .field("sorter", &self.sorter.as_ref().map(|_| "<fn>"))
            .field("on_filter", &self.on_filter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
