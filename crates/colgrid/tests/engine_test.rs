//! Integration tests for the colgrid configuration engine.

use std::sync::Arc;

use serde_json::json;

use colgrid::{
    placeholder_cell, recompute, CellContent, ColumnDescriptor, FilterKind, FilterUi,
    FilterValue, FixedSide, Pagination, Row, SemanticType, TableEngine, TableOptions,
};

fn city_rows(distinct: usize) -> Vec<Row> {
    (0..distinct)
        .map(|i| Row::new().with("id", i as i64).with("city", format!("city-{i}")))
        .collect()
}

// =============================================================================
// Override Merge
// =============================================================================

#[test]
fn test_overrides_never_replaced() {
    let render: colgrid::Renderer = Arc::new(|_, _| CellContent::text("custom"));
    let sorter: colgrid::Sorter = Arc::new(|_, _| std::cmp::Ordering::Equal);
    let on_filter: colgrid::FilterPredicate = Arc::new(|_, _| true);

    let columns = vec![Some(
        ColumnDescriptor::new("city")
            .with_render(Arc::clone(&render))
            .with_sorter(Arc::clone(&sorter))
            .with_on_filter(Arc::clone(&on_filter)),
    )];
    let rows = city_rows(3);

    let first = recompute(&columns, &rows, &TableOptions::new()).unwrap();
    let second = recompute(&columns, &rows, &TableOptions::new()).unwrap();

    for config in [&first, &second] {
        let col = &config.columns[0];
        assert!(Arc::ptr_eq(col.render.as_ref().unwrap(), &render));
        assert!(Arc::ptr_eq(col.sorter.as_ref().unwrap(), &sorter));
        assert!(Arc::ptr_eq(col.on_filter.as_ref().unwrap(), &on_filter));
    }
}

// =============================================================================
// Width Aggregation
// =============================================================================

#[test]
fn test_total_width_is_sum_of_resolved_widths() {
    let columns = vec![
        Some(ColumnDescriptor::new("a").with_width(120)),
        Some(ColumnDescriptor::new("b")),
        Some(ColumnDescriptor::new("c")),
    ];
    let rows = city_rows(2);

    let config = recompute(&columns, &rows, &TableOptions::new().with_row_width(100)).unwrap();
    assert_eq!(config.total_width, 120 + 100 + 100);

    // Changing the table default shifts only the unset-width columns.
    let wider = recompute(&columns, &rows, &TableOptions::new().with_row_width(150)).unwrap();
    assert_eq!(wider.total_width, 120 + 150 + 150);
}

// =============================================================================
// Cardinality Cutoff
// =============================================================================

#[test]
fn test_29_distinct_values_produce_discrete_menu() {
    let rows = city_rows(29);
    let columns = vec![Some(ColumnDescriptor::new("city"))];
    let config = recompute(&columns, &rows, &TableOptions::new()).unwrap();

    let col = &config.columns[0];
    assert_eq!(col.filter_options.as_ref().map(|o| o.len()), Some(29));
    assert_eq!(col.filter_ui, Some(FilterUi::Menu));
}

#[test]
fn test_30_distinct_values_opt_out_to_search() {
    let rows = city_rows(30);
    let columns = vec![Some(ColumnDescriptor::new("city"))];
    let config = recompute(&columns, &rows, &TableOptions::new()).unwrap();

    let col = &config.columns[0];
    assert!(col.filter_options.is_none());
    assert!(matches!(col.filter_ui, Some(FilterUi::Search { .. })));

    // The free-text predicate is case-insensitive substring containment.
    let predicate = col.on_filter.as_ref().unwrap();
    assert!(predicate(&FilterValue::value("CITY-1"), &rows[1]));
    assert!(!predicate(&FilterValue::value("zzz"), &rows[1]));
}

// =============================================================================
// Empty-Value Semantics
// =============================================================================

#[test]
fn test_boolean_empty_sentinel_matches_only_absent_rows() {
    let rows = vec![
        Row::new().with("id", 1).with("flag", true),
        Row::new().with("id", 2).with("flag", false),
        Row::new().with("id", 3),
    ];
    let columns = vec![Some(
        ColumnDescriptor::new("flag").with_type(SemanticType::Boolean),
    )];
    let config = recompute(&columns, &rows, &TableOptions::new()).unwrap();
    let predicate = config.columns[0].on_filter.as_ref().unwrap();

    let empty_matches: Vec<bool> = rows
        .iter()
        .map(|r| predicate(&FilterValue::Empty, r))
        .collect();
    assert_eq!(empty_matches, vec![false, false, true]);

    let false_matches: Vec<bool> = rows
        .iter()
        .map(|r| predicate(&FilterValue::value(false), r))
        .collect();
    assert_eq!(false_matches, vec![false, true, false]);
}

#[test]
fn test_string_menu_collapses_missing_values_to_sentinel() {
    let rows = vec![
        Row::new().with("id", 1).with("city", "a"),
        Row::new().with("id", 2),
        Row::new().with("id", 3).with("city", ""),
    ];
    let columns = vec![Some(ColumnDescriptor::new("city"))];
    let config = recompute(&columns, &rows, &TableOptions::new()).unwrap();

    let options = config.columns[0].filter_options.as_ref().unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[1].value, FilterValue::Empty);
    assert_eq!(options[1].label, placeholder_cell());

    let predicate = config.columns[0].on_filter.as_ref().unwrap();
    assert!(predicate(&FilterValue::Empty, &rows[1]));
    assert!(!predicate(&FilterValue::Empty, &rows[0]));
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_money_rendering() {
    let rows = vec![Row::new().with("price", 1234.0)];
    let columns = vec![Some(
        ColumnDescriptor::new("price").with_type(SemanticType::Money),
    )];
    let config = recompute(&columns, &rows, &TableOptions::new()).unwrap();
    let render = config.columns[0].render.as_ref().unwrap();

    assert_eq!(
        render(Some(&json!(1234.0)), &rows[0]),
        CellContent::text("￥1,234")
    );
    assert_eq!(
        render(Some(&json!(1234.5)), &rows[0]),
        CellContent::text("￥1,234.50")
    );
    assert_eq!(render(None, &rows[0]), placeholder_cell());
}

#[test]
fn test_time_rendering_and_ordering() {
    let rows = vec![
        Row::new().with("at", "2024-03-01 10:30:00"),
        Row::new(),
    ];
    let columns = vec![Some(
        ColumnDescriptor::new("at").with_type(SemanticType::Time),
    )];
    let config = recompute(&columns, &rows, &TableOptions::new()).unwrap();
    let col = &config.columns[0];

    let render = col.render.as_ref().unwrap();
    assert_eq!(
        render(rows[0].get("at"), &rows[0]),
        CellContent::text("2024-03-01 10:30:00")
    );
    assert_eq!(render(None, &rows[1]), placeholder_cell());

    let sorter = col.sorter.as_ref().unwrap();
    assert_eq!(sorter(&rows[1], &rows[0]), std::cmp::Ordering::Less);
    assert_eq!(sorter(&rows[1], &rows[1]), std::cmp::Ordering::Equal);
}

#[test]
fn test_image_list_rendering() {
    let rows = vec![Row::new().with("photos", json!(["a.png", "b.png"]))];
    let columns = vec![Some(
        ColumnDescriptor::new("photos").with_type(SemanticType::ImageList),
    )];
    let config = recompute(&columns, &rows, &TableOptions::new()).unwrap();
    let render = config.columns[0].render.as_ref().unwrap();

    assert_eq!(
        render(rows[0].get("photos"), &rows[0]),
        CellContent::ImageStrip {
            urls: vec!["a.png".to_string(), "b.png".to_string()]
        }
    );
    assert_eq!(render(Some(&json!([])), &rows[0]), placeholder_cell());
}

// =============================================================================
// Grouped Columns & Gaps
// =============================================================================

#[test]
fn test_grouped_column_bordering() {
    let columns = vec![
        Some(
            ColumnDescriptor::new("stats")
                .with_title("Match Statistics")
                .with_children(vec![
                    ColumnDescriptor::new("wins").with_type(SemanticType::Number),
                    ColumnDescriptor::new("losses").with_type(SemanticType::Number),
                ]),
        ),
        Some(ColumnDescriptor::new("name")),
    ];
    let rows = city_rows(2);
    let config = recompute(&columns, &rows, &TableOptions::new()).unwrap();

    assert!(config.bordered);
    assert_eq!(config.columns[0].title, "stats");
    assert_eq!(config.columns[0].children.len(), 2);
    assert!(!config.columns[1].is_group());
}

#[test]
fn test_gap_skipping() {
    let columns = vec![
        None,
        Some(ColumnDescriptor::new("a")),
        Some(ColumnDescriptor::new("b")),
    ];
    let rows = city_rows(2);
    let config = recompute(&columns, &rows, &TableOptions::new()).unwrap();

    let keys: Vec<_> = config.columns.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(config.total_width, 400);
    assert_eq!(config.columns[0].fixed, Some(FixedSide::Leading));
}

// =============================================================================
// Memoization
// =============================================================================

#[test]
fn test_engine_recomputes_only_on_dataset_change() {
    let mut engine = TableEngine::new();
    let columns = vec![Some(ColumnDescriptor::new("city"))];
    let dataset = Arc::new(city_rows(3));

    let first = engine
        .configure(&columns, &dataset, &TableOptions::new())
        .unwrap();

    // Same dataset reference: cached config, even with different options.
    let cached = engine
        .configure(
            &columns,
            &dataset,
            &TableOptions::new().with_pagination(Pagination::Disabled),
        )
        .unwrap();
    assert!(Arc::ptr_eq(&first, &cached));

    // Equal contents but a new reference: wholesale recomputation.
    let replacement = Arc::new(city_rows(3));
    let fresh = engine
        .configure(&columns, &replacement, &TableOptions::new())
        .unwrap();
    assert!(!Arc::ptr_eq(&first, &fresh));
}

// =============================================================================
// Summary
// =============================================================================

#[test]
fn test_summary_reports_filter_kinds() {
    let columns = vec![
        Some(ColumnDescriptor::new("city")),
        Some(ColumnDescriptor::new("flag").with_type(SemanticType::Boolean)),
        Some(ColumnDescriptor::new("price").with_type(SemanticType::Money)),
    ];
    let rows = vec![
        Row::new().with("city", "a").with("flag", true).with("price", 2.0),
    ];
    let config = recompute(&columns, &rows, &TableOptions::new()).unwrap();
    let summary = config.summary();

    assert_eq!(summary.columns[0].filter, FilterKind::Menu);
    assert_eq!(summary.columns[1].filter, FilterKind::Radio);
    assert_eq!(summary.columns[2].filter, FilterKind::None);
    assert!(summary.columns[2].sortable);
    assert!(!summary.bordered);

    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"total_width\""));
}
