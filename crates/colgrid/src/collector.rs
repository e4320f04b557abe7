//! Distinct-value collection for discrete filter menus.

use indexmap::IndexMap;
use serde_json::Value;

use crate::empty::placeholder_cell;
use crate::render::CellContent;
use crate::row::{canonical_key, display_value, is_falsy, Row};
use crate::schema::{FilterOption, FilterValue};

/// Distinct-value threshold at or above which a discrete filter menu is
/// replaced by free-text search. Bounds menu size, not computation.
pub const CARDINALITY_CUTOFF: usize = 30;

/// Internal map key reserved for the empty sentinel. Contains a NUL byte so
/// it cannot collide with the canonical form of any real value.
const EMPTY_KEY: &str = "\u{0}empty";

/// Derives the distinct value set for a column from the dataset, subject to
/// a cardinality cutoff.
#[derive(Debug, Clone)]
pub struct FilterValueCollector {
    cutoff: usize,
}

impl FilterValueCollector {
    /// Collector with the standard cutoff of [`CARDINALITY_CUTOFF`].
    pub fn new() -> Self {
        Self {
            cutoff: CARDINALITY_CUTOFF,
        }
    }

    /// Collector with a custom cutoff.
    pub fn with_cutoff(cutoff: usize) -> Self {
        Self { cutoff }
    }

    /// Collect the distinct values for `key` across all rows, in first-seen
    /// order. Falsy or missing values collapse to one sentinel option
    /// labeled via the placeholder. When `flatten_lists` is set, array
    /// values contribute their elements instead of the array itself.
    ///
    /// Returns `None` when the distinct count reaches the cutoff, signaling
    /// the caller to install the free-text fallback. Collection
    /// short-circuits as soon as the cutoff is crossed.
    pub fn distinct_values(
        &self,
        rows: &[Row],
        key: &str,
        flatten_lists: bool,
    ) -> Option<Vec<FilterOption>> {
        let mut seen: IndexMap<String, FilterOption> = IndexMap::new();

        for row in rows {
            let value = row.get(key);
            if flatten_lists {
                match value {
                    Some(Value::Array(items)) if !items.is_empty() => {
                        for item in items {
                            self.note(&mut seen, Some(item))?;
                        }
                    }
                    other => self.note(&mut seen, other)?,
                }
            } else {
                self.note(&mut seen, value)?;
            }
        }

        Some(seen.into_values().collect())
    }

    /// Record one value; `None` means the cutoff was crossed.
    fn note(
        &self,
        seen: &mut IndexMap<String, FilterOption>,
        value: Option<&Value>,
    ) -> Option<()> {
        if is_falsy(value) {
            seen.entry(EMPTY_KEY.to_string())
                .or_insert_with(|| FilterOption::new(FilterValue::Empty, placeholder_cell()));
        } else if let Some(v) = value {
            seen.entry(canonical_key(v)).or_insert_with(|| {
                FilterOption::new(
                    FilterValue::Value(v.clone()),
                    CellContent::text(display_value(v)),
                )
            });
        }
        if seen.len() >= self.cutoff {
            return None;
        }
        Some(())
    }
}

impl Default for FilterValueCollector {
    fn default() -> Self {
        Self::new()
    }
}
