//! Type-indexed default behavior synthesis.
//!
//! Maps a semantic type to the bundle of behaviors a column of that type
//! gets by default. Every facet is optional; absent entries mean "no
//! default for this facet". The processor installs each facet only where
//! the caller's descriptor left it unset.

use std::cmp::Ordering;
use std::sync::Arc;

use serde_json::Value;

use crate::collector::FilterValueCollector;
use crate::empty::{placeholder, placeholder_cell};
use crate::render::{
    format_money, format_percent, parse_timestamp, CellContent, FilterPredicate, Renderer,
    Sorter, DATE_FORMAT, TIME_FORMAT,
};
use crate::row::{as_number, display_value, is_falsy, is_missing, Row};
use crate::schema::{FilterOption, FilterUi, FilterValue, SemanticType};

/// Default behaviors for one semantic type, resolved against one dataset.
#[derive(Default)]
pub struct TypeDefaults {
    pub sorter: Option<Sorter>,
    pub render: Option<Renderer>,
    pub filter_options: Option<Vec<FilterOption>>,
    pub filter_ui: Option<FilterUi>,
    pub on_filter: Option<FilterPredicate>,
}

/// Pure mapping from a semantic type tag to its default behavior bundle.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    collector: FilterValueCollector,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            collector: FilterValueCollector::new(),
        }
    }

    pub fn with_collector(collector: FilterValueCollector) -> Self {
        Self { collector }
    }

    /// Resolve the default behaviors for a column of type `ty` keyed by
    /// `key`. String-ish types derive their discrete filter menu from the
    /// dataset; `has_explicit_filters` tells the registry the caller already
    /// supplied menu entries, so no collection is needed for that facet.
    pub fn defaults_for(
        &self,
        ty: SemanticType,
        key: &str,
        rows: &[Row],
        has_explicit_filters: bool,
    ) -> TypeDefaults {
        match ty {
            SemanticType::Number => TypeDefaults {
                sorter: Some(numeric_sorter(key)),
                render: Some(passthrough_render()),
                ..TypeDefaults::default()
            },
            SemanticType::Money => TypeDefaults {
                sorter: Some(numeric_sorter(key)),
                render: Some(money_render()),
                ..TypeDefaults::default()
            },
            SemanticType::Percent => TypeDefaults {
                sorter: Some(numeric_sorter(key)),
                render: Some(percent_render()),
                ..TypeDefaults::default()
            },
            SemanticType::Time => TypeDefaults {
                sorter: Some(temporal_sorter(key)),
                render: Some(timestamp_render(TIME_FORMAT)),
                ..TypeDefaults::default()
            },
            SemanticType::Date => TypeDefaults {
                sorter: Some(temporal_sorter(key)),
                render: Some(timestamp_render(DATE_FORMAT)),
                ..TypeDefaults::default()
            },
            SemanticType::Boolean => TypeDefaults {
                render: Some(boolean_render()),
                filter_ui: Some(boolean_radio()),
                on_filter: Some(boolean_predicate(key)),
                ..TypeDefaults::default()
            },
            SemanticType::Image => TypeDefaults {
                render: Some(image_render()),
                ..TypeDefaults::default()
            },
            SemanticType::ImageList => TypeDefaults {
                render: Some(image_list_render()),
                ..TypeDefaults::default()
            },
            SemanticType::StringList => self.string_list_defaults(key, rows, has_explicit_filters),
            // Everything else falls through to string handling, so every
            // leaf column ends up with a renderer and a filter policy.
            SemanticType::String
            | SemanticType::Object
            | SemanticType::ObjectList
            | SemanticType::Other => self.string_defaults(key, rows, has_explicit_filters),
        }
    }

    /// String columns: discrete menu from distinct row values under the
    /// cutoff, otherwise a case-insensitive free-text substring filter.
    fn string_defaults(
        &self,
        key: &str,
        rows: &[Row],
        has_explicit_filters: bool,
    ) -> TypeDefaults {
        let mut defaults = TypeDefaults {
            render: Some(passthrough_render()),
            ..TypeDefaults::default()
        };

        if has_explicit_filters {
            defaults.filter_ui = Some(FilterUi::Menu);
            return defaults;
        }

        match self.collector.distinct_values(rows, key, false) {
            Some(options) if !options.is_empty() => {
                defaults.filter_options = Some(options);
                defaults.filter_ui = Some(FilterUi::Menu);
            }
            _ => {
                defaults.filter_ui = Some(FilterUi::search());
                defaults.on_filter = Some(substring_predicate(key));
            }
        }
        defaults
    }

    /// String-list columns: comma-joined render; discrete menu from
    /// flattened distinct values under the cutoff, else free-text search.
    fn string_list_defaults(
        &self,
        key: &str,
        rows: &[Row],
        has_explicit_filters: bool,
    ) -> TypeDefaults {
        let mut defaults = TypeDefaults {
            render: Some(string_list_render()),
            on_filter: Some(list_predicate(key)),
            ..TypeDefaults::default()
        };

        if has_explicit_filters {
            defaults.filter_ui = Some(FilterUi::Menu);
            return defaults;
        }

        match self.collector.distinct_values(rows, key, true) {
            Some(options) if !options.is_empty() => {
                defaults.filter_options = Some(options);
                defaults.filter_ui = Some(FilterUi::Menu);
            }
            _ => {
                defaults.filter_ui = Some(FilterUi::search());
            }
        }
        defaults
    }
}

/// Exact-match predicate installed when a column ends up with a discrete
/// menu but no explicit predicate. The empty sentinel matches
/// null-or-absent values.
pub fn exact_match_predicate(key: &str) -> FilterPredicate {
    let key = key.to_string();
    Arc::new(move |selected: &FilterValue, row: &Row| match selected {
        FilterValue::All => true,
        FilterValue::Empty => is_missing(row.get(&key)),
        FilterValue::Value(v) => row.get(&key) == Some(v),
    })
}

/// Missing numeric values coerce to zero for ordering, so "missing" and
/// "zero" compare equal.
fn numeric_sorter(key: &str) -> Sorter {
    let key = key.to_string();
    Arc::new(move |a: &Row, b: &Row| {
        let left = as_number(a.get(&key)).unwrap_or(0.0);
        let right = as_number(b.get(&key)).unwrap_or(0.0);
        left.partial_cmp(&right).unwrap_or(Ordering::Equal)
    })
}

/// Missing timestamps sort earliest; two missing values compare equal so
/// the order stays total. Unparseable values count as missing.
fn temporal_sorter(key: &str) -> Sorter {
    let key = key.to_string();
    Arc::new(move |a: &Row, b: &Row| {
        match (parse_timestamp(a.get(&key)), parse_timestamp(b.get(&key))) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(left), Some(right)) => left.cmp(&right),
        }
    })
}

fn passthrough_render() -> Renderer {
    Arc::new(|value: Option<&Value>, _row: &Row| placeholder(value, None))
}

fn money_render() -> Renderer {
    Arc::new(|value: Option<&Value>, _row: &Row| match as_number(value) {
        Some(n) => CellContent::text(format_money(n)),
        None => placeholder_cell(),
    })
}

fn percent_render() -> Renderer {
    Arc::new(|value: Option<&Value>, _row: &Row| match as_number(value) {
        Some(n) => CellContent::text(format_percent(n)),
        None => placeholder_cell(),
    })
}

fn timestamp_render(format: &'static str) -> Renderer {
    Arc::new(move |value: Option<&Value>, _row: &Row| match parse_timestamp(value) {
        Some(ts) => CellContent::text(ts.format(format).to_string()),
        None => placeholder_cell(),
    })
}

fn boolean_render() -> Renderer {
    Arc::new(|value: Option<&Value>, _row: &Row| match value {
        None | Some(Value::Null) => placeholder_cell(),
        Some(v) if is_falsy(Some(v)) => CellContent::Cross,
        Some(_) => CellContent::Check,
    })
}

fn image_render() -> Renderer {
    Arc::new(|value: Option<&Value>, _row: &Row| match value {
        Some(Value::String(url)) if !url.is_empty() => CellContent::Image { url: url.clone() },
        _ => placeholder_cell(),
    })
}

fn image_list_render() -> Renderer {
    Arc::new(|value: Option<&Value>, _row: &Row| match value {
        Some(Value::Array(items)) if !items.is_empty() => CellContent::ImageStrip {
            urls: items.iter().map(display_value).collect(),
        },
        _ => placeholder_cell(),
    })
}

fn string_list_render() -> Renderer {
    Arc::new(|value: Option<&Value>, _row: &Row| match value {
        Some(Value::Array(items)) if !items.is_empty() => {
            let joined: Vec<String> = items.iter().map(display_value).collect();
            CellContent::text(joined.join(","))
        }
        _ => placeholder_cell(),
    })
}

/// Single-select among four mutually exclusive choices.
fn boolean_radio() -> FilterUi {
    FilterUi::Radio {
        choices: vec![
            FilterOption::new(FilterValue::All, CellContent::text("全部")),
            FilterOption::new(FilterValue::value(true), CellContent::Check),
            FilterOption::new(FilterValue::value(false), CellContent::Cross),
            FilterOption::new(FilterValue::Empty, placeholder_cell()),
        ],
    }
}

fn boolean_predicate(key: &str) -> FilterPredicate {
    let key = key.to_string();
    Arc::new(move |selected: &FilterValue, row: &Row| match selected {
        FilterValue::Value(Value::Bool(true)) => row.get(&key) == Some(&Value::Bool(true)),
        FilterValue::Value(Value::Bool(false)) => row.get(&key) == Some(&Value::Bool(false)),
        FilterValue::Empty => is_missing(row.get(&key)),
        _ => true,
    })
}

/// Case-insensitive substring containment; the sentinel means "field is
/// absent".
fn substring_predicate(key: &str) -> FilterPredicate {
    let key = key.to_string();
    Arc::new(move |selected: &FilterValue, row: &Row| match selected {
        FilterValue::All => true,
        FilterValue::Empty => is_missing(row.get(&key)),
        FilterValue::Value(term) => {
            let needle = display_value(term).to_lowercase();
            match row.get(&key) {
                Some(Value::Null) | None => false,
                Some(v) => display_value(v).to_lowercase().contains(&needle),
            }
        }
    })
}

/// The sentinel matches empty or absent lists; a term matches when the
/// joined representation contains it.
fn list_predicate(key: &str) -> FilterPredicate {
    let key = key.to_string();
    Arc::new(move |selected: &FilterValue, row: &Row| match selected {
        FilterValue::All => true,
        FilterValue::Empty => match row.get(&key) {
            None | Some(Value::Null) => true,
            Some(Value::Array(items)) => items.is_empty(),
            Some(_) => false,
        },
        FilterValue::Value(term) => {
            let needle = display_value(term);
            match row.get(&key) {
                Some(Value::Array(items)) => {
                    let joined: String = items.iter().map(|v| display_value(v)).collect();
                    joined.contains(&needle)
                }
                _ => false,
            }
        }
    })
}
