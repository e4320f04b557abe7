//! colgrid: declarative column configuration for tabular data display.
//!
//! Given a minimal column descriptor (a key and an optional semantic type
//! tag), colgrid synthesizes the full behavior set a rich data grid needs:
//! cell renderer, sort comparator, filter control, and filter predicate.
//! Explicitly supplied behaviors always win over synthesized defaults.
//!
//! The engine only computes configuration. It never fetches data, manages
//! pagination state, or paints cells; the host rendering widget consumes
//! the [`TableConfig`] it produces.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use colgrid::{ColumnDescriptor, Row, SemanticType, TableEngine, TableOptions};
//!
//! let columns = vec![
//!     Some(ColumnDescriptor::new("name")),
//!     Some(ColumnDescriptor::new("price").with_type(SemanticType::Money)),
//! ];
//! let dataset = Arc::new(vec![
//!     Row::new().with("name", "widget").with("price", 1234.5),
//! ]);
//!
//! let mut engine = TableEngine::new();
//! let config = engine
//!     .configure(&columns, &dataset, &TableOptions::new())
//!     .unwrap();
//!
//! assert_eq!(config.columns.len(), 2);
//! assert_eq!(config.total_width, 400);
//! ```

pub mod collector;
pub mod empty;
pub mod error;
pub mod input;
pub mod processor;
pub mod registry;
pub mod render;
pub mod row;
pub mod schema;
pub mod table;

pub use collector::{FilterValueCollector, CARDINALITY_CUTOFF};
pub use empty::{placeholder, placeholder_cell, PLACEHOLDER_TEXT};
pub use error::{ColgridError, Result};
pub use input::{infer_columns, Loader, LoaderConfig};
pub use processor::{ColumnProcessor, DEFAULT_COLUMN_WIDTH};
pub use registry::{TypeDefaults, TypeRegistry};
pub use render::{CellContent, FilterPredicate, Renderer, Sorter};
pub use row::Row;
pub use schema::{
    ColumnDescriptor, ColumnSummary, FilterKind, FilterOption, FilterUi, FilterValue,
    FinalizedColumn, FixedSide, SemanticType, SortOrder,
};
pub use table::{
    recompute, ConfigSummary, Expandable, Pagination, PaginationConfig, RowSelection, Scroll,
    ScrollHeight, SelectionMode, TableConfig, TableEngine, TableOptions,
};
