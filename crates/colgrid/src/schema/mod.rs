//! Column descriptor and finalized-column types.

mod descriptor;
mod finalized;
mod types;

pub use descriptor::ColumnDescriptor;
pub use finalized::{ColumnSummary, FilterKind, FinalizedColumn};
pub use types::{FilterOption, FilterUi, FilterValue, FixedSide, SemanticType, SortOrder};
