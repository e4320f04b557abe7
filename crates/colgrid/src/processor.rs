//! Per-column default synthesis.

use std::collections::HashSet;

use crate::error::{ColgridError, Result};
use crate::registry::{exact_match_predicate, TypeRegistry};
use crate::row::Row;
use crate::schema::{ColumnDescriptor, FinalizedColumn};

/// Width applied when neither the column nor the table supplies one.
pub const DEFAULT_COLUMN_WIDTH: u32 = 200;

/// Fills in every unset field of a column descriptor using the type
/// registry and the dataset, never overwriting caller-supplied fields.
#[derive(Debug, Clone, Default)]
pub struct ColumnProcessor {
    registry: TypeRegistry,
}

impl ColumnProcessor {
    pub fn new() -> Self {
        Self {
            registry: TypeRegistry::new(),
        }
    }

    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    /// Process one descriptor into a finalized column.
    ///
    /// Pure: the input descriptor is left untouched and a fresh finalized
    /// structure is returned. Each field is a left-biased merge of the
    /// descriptor over the synthesized defaults. Grouped columns have their
    /// title forced to the key and their children processed recursively
    /// with the same `default_width` and dataset.
    pub fn process(
        &self,
        descriptor: &ColumnDescriptor,
        default_width: Option<u32>,
        rows: &[Row],
    ) -> Result<FinalizedColumn> {
        let semantic_type = descriptor.semantic_type.unwrap_or_default();
        let width = descriptor
            .width
            .or(default_width)
            .unwrap_or(DEFAULT_COLUMN_WIDTH);

        if !descriptor.children.is_empty() {
            // Group headers are not independently titled and hold no data,
            // so no behavior facets are synthesized for them.
            check_sibling_keys(&descriptor.children, &descriptor.key)?;
            let children = descriptor
                .children
                .iter()
                .map(|child| self.process(child, default_width, rows))
                .collect::<Result<Vec<_>>>()?;

            return Ok(FinalizedColumn {
                key: descriptor.key.clone(),
                data_index: descriptor.key.clone(),
                title: descriptor.key.clone(),
                semantic_type,
                width,
                fixed: descriptor.fixed,
                default_sort_order: descriptor.default_sort_order,
                render: descriptor.render.clone(),
                sorter: descriptor.sorter.clone(),
                filter_options: descriptor.filter_options.clone(),
                filter_ui: descriptor.filter_ui.clone(),
                on_filter: descriptor.on_filter.clone(),
                children,
            });
        }

        let defaults = self.registry.defaults_for(
            semantic_type,
            &descriptor.key,
            rows,
            descriptor.filter_options.is_some(),
        );

        let mut column = FinalizedColumn {
            key: descriptor.key.clone(),
            data_index: descriptor.key.clone(),
            title: descriptor
                .title
                .clone()
                .unwrap_or_else(|| descriptor.key.clone()),
            semantic_type,
            width,
            fixed: descriptor.fixed,
            default_sort_order: descriptor.default_sort_order,
            render: descriptor.render.clone().or(defaults.render),
            sorter: descriptor.sorter.clone().or(defaults.sorter),
            filter_options: descriptor.filter_options.clone().or(defaults.filter_options),
            filter_ui: descriptor.filter_ui.clone().or(defaults.filter_ui),
            on_filter: descriptor.on_filter.clone().or(defaults.on_filter),
            children: Vec::new(),
        };

        // A discrete menu without a predicate gets exact matching, with the
        // sentinel matching null-or-absent values.
        if column.filter_options.is_some() && column.on_filter.is_none() {
            column.on_filter = Some(exact_match_predicate(&column.key));
        }

        Ok(column)
    }
}

/// Enforce sibling-key uniqueness under one parent.
pub(crate) fn check_sibling_keys<'a, I>(siblings: I, parent: &str) -> Result<()>
where
    I: IntoIterator<Item = &'a ColumnDescriptor>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    for descriptor in siblings {
        if !seen.insert(descriptor.key.as_str()) {
            return Err(ColgridError::DuplicateKey {
                parent: parent.to_string(),
                key: descriptor.key.clone(),
            });
        }
    }
    Ok(())
}
