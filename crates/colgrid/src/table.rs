//! Table-level recomputation and display options.
//!
//! [`recompute`] derives the full column set and layout metadata from the
//! column descriptors, the dataset, and the table options. [`TableEngine`]
//! wraps it in a memoized derivation keyed on dataset identity: the host
//! may call it on every render pass, but the body only re-executes when the
//! dataset reference changes.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::processor::{check_sibling_keys, ColumnProcessor};
use crate::render::{RowRenderer, SelectionCallback};
use crate::row::Row;
use crate::schema::{ColumnDescriptor, ColumnSummary, FinalizedColumn, FixedSide};

/// Default row-key field.
pub const DEFAULT_ROW_KEY: &str = "id";

/// Default page size when the caller supplies no pagination config.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Pagination behavior for the host widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pagination {
    /// Pagination is explicitly turned off.
    Disabled,
    /// Paginate with the given configuration.
    Config(PaginationConfig),
}

/// Concrete pagination settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub page_size: usize,
    pub show_size_changer: bool,
}

impl PaginationConfig {
    /// Localized "showing X-Y of N" summary line.
    pub fn page_summary(&self, total: usize, range: (usize, usize)) -> String {
        format!("共 {} 条，第 {}-{} 条", total, range.0, range.1)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            show_size_changer: false,
        }
    }
}

/// Vertical extent of the scroll region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ScrollHeight {
    /// Fraction of the viewport height.
    ViewportFraction(f32),
    /// Fixed height in pixels.
    Fixed(u32),
}

impl Default for ScrollHeight {
    fn default() -> Self {
        ScrollHeight::ViewportFraction(0.8)
    }
}

/// Scroll region handed to the host widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scroll {
    /// Horizontal scroll width: the total column width.
    pub x: u32,
    /// Vertical scroll height.
    pub y: ScrollHeight,
}

/// Row selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    Checkbox,
    Radio,
}

/// Row selection configuration, passed through to the host widget.
#[derive(Clone)]
pub struct RowSelection {
    pub mode: SelectionMode,
    pub on_change: Option<SelectionCallback>,
}

impl RowSelection {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            on_change: None,
        }
    }

    pub fn with_on_change(mut self, callback: SelectionCallback) -> Self {
        self.on_change = Some(callback);
        self
    }
}

impl fmt::Debug for RowSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowSelection")
            .field("mode", &self.mode)
            .field("on_change", &self.on_change.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Expandable-row configuration, passed through unchanged.
#[derive(Clone)]
pub struct Expandable {
    pub default_expand_all_rows: bool,
    pub expand_row_by_click: bool,
    pub expanded_row_render: RowRenderer,
}

impl fmt::Debug for Expandable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expandable")
            .field("default_expand_all_rows", &self.default_expand_all_rows)
            .field("expand_row_by_click", &self.expand_row_by_click)
            .field("expanded_row_render", &"<fn>")
            .finish()
    }
}

/// Table-level options supplied by the caller.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Row-key field. Defaults to `"id"`.
    pub row_key: Option<String>,
    /// Row selection configuration.
    pub row_selection: Option<RowSelection>,
    /// Explicit pagination override or disablement; `None` takes the
    /// default configuration.
    pub pagination: Option<Pagination>,
    /// Loading flag, passed through.
    pub loading: bool,
    /// Expandable-row configuration, passed through.
    pub expandable: Option<Expandable>,
    /// Default width for columns that set none.
    pub row_width: Option<u32>,
    /// Vertical scroll override.
    pub scroll_y: Option<ScrollHeight>,
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row_key(mut self, key: impl Into<String>) -> Self {
        self.row_key = Some(key.into());
        self
    }

    pub fn with_row_selection(mut self, selection: RowSelection) -> Self {
        self.row_selection = Some(selection);
        self
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn with_expandable(mut self, expandable: Expandable) -> Self {
        self.expandable = Some(expandable);
        self
    }

    pub fn with_row_width(mut self, width: u32) -> Self {
        self.row_width = Some(width);
        self
    }

    pub fn with_scroll_y(mut self, height: ScrollHeight) -> Self {
        self.scroll_y = Some(height);
        self
    }
}

/// Everything the host rendering widget consumes.
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub columns: Vec<FinalizedColumn>,
    pub total_width: u32,
    pub bordered: bool,
    pub pagination: Pagination,
    pub scroll: Scroll,
    pub row_key: String,
    pub loading: bool,
    pub row_selection: Option<RowSelection>,
    pub expandable: Option<Expandable>,
}

impl TableConfig {
    /// Serializable projection without the behavior closures.
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            columns: self.columns.iter().map(|c| c.summary()).collect(),
            total_width: self.total_width,
            bordered: self.bordered,
            pagination: self.pagination.clone(),
            scroll: self.scroll.clone(),
            row_key: self.row_key.clone(),
        }
    }
}

/// Serializable view of a table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSummary {
    pub columns: Vec<ColumnSummary>,
    pub total_width: u32,
    pub bordered: bool,
    pub pagination: Pagination,
    pub scroll: Scroll,
    pub row_key: String,
}

/// Recompute the full table configuration from scratch.
///
/// Explicit `None` entries in `columns` are intentionally hidden columns:
/// they are excluded from processing, from the output list, and from the
/// accumulated width. The first surviving column is pinned leading unless
/// it carries an explicit pin. Group widths count once at the group level.
pub fn recompute(
    columns: &[Option<ColumnDescriptor>],
    rows: &[Row],
    options: &TableOptions,
) -> Result<TableConfig> {
    recompute_with(&ColumnProcessor::new(), columns, rows, options)
}

fn recompute_with(
    processor: &ColumnProcessor,
    columns: &[Option<ColumnDescriptor>],
    rows: &[Row],
    options: &TableOptions,
) -> Result<TableConfig> {
    let survivors: Vec<&ColumnDescriptor> = columns.iter().flatten().collect();
    check_sibling_keys(survivors.iter().copied(), "table")?;

    let mut finalized = Vec::with_capacity(survivors.len());
    let mut total_width: u32 = 0;
    let mut bordered = false;

    for descriptor in survivors {
        let column = processor.process(descriptor, options.row_width, rows)?;
        bordered |= column.is_group();
        total_width += column.width;
        finalized.push(column);
    }

    if let Some(first) = finalized.first_mut() {
        if first.fixed.is_none() {
            first.fixed = Some(FixedSide::Leading);
        }
    }

    let pagination = options
        .pagination
        .clone()
        .unwrap_or_else(|| Pagination::Config(PaginationConfig::default()));
    let scroll = Scroll {
        x: total_width,
        y: options.scroll_y.clone().unwrap_or_default(),
    };

    Ok(TableConfig {
        columns: finalized,
        total_width,
        bordered,
        pagination,
        scroll,
        row_key: options
            .row_key
            .clone()
            .unwrap_or_else(|| DEFAULT_ROW_KEY.to_string()),
        loading: options.loading,
        row_selection: options.row_selection.clone(),
        expandable: options.expandable.clone(),
    })
}

/// Memoized table configuration derivation.
///
/// The cache key is the dataset's `Arc` identity: calling [`configure`] with
/// the same `Arc` returns the cached configuration without recomputing,
/// regardless of descriptor or option changes. Swapping in a new dataset
/// `Arc` discards the previous configuration wholesale.
///
/// [`configure`]: TableEngine::configure
#[derive(Debug, Default)]
pub struct TableEngine {
    processor: ColumnProcessor,
    cache: Option<(Arc<Vec<Row>>, Arc<TableConfig>)>,
}

impl TableEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive (or return the cached) table configuration for the dataset.
    pub fn configure(
        &mut self,
        columns: &[Option<ColumnDescriptor>],
        dataset: &Arc<Vec<Row>>,
        options: &TableOptions,
    ) -> Result<Arc<TableConfig>> {
        if let Some((cached_rows, cached_config)) = &self.cache {
            if Arc::ptr_eq(cached_rows, dataset) {
                return Ok(Arc::clone(cached_config));
            }
        }

        let config = Arc::new(recompute_with(
            &self.processor,
            columns,
            dataset.as_slice(),
            options,
        )?);
        self.cache = Some((Arc::clone(dataset), Arc::clone(&config)));
        Ok(config)
    }

    /// Drop the cached configuration, forcing the next call to recompute.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }
}
