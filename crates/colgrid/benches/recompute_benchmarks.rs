//! Benchmarks for full-table recomputation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use colgrid::{recompute, ColumnDescriptor, Row, SemanticType, TableOptions};

fn build_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            Row::new()
                .with("id", i as i64)
                .with("name", format!("user-{i}"))
                .with("city", format!("city-{}", i % 20))
                .with("balance", (i as f64) * 1.5)
                .with("active", i % 2 == 0)
                .with("joined", "2024-03-01 10:00:00")
        })
        .collect()
}

fn build_columns() -> Vec<Option<ColumnDescriptor>> {
    vec![
        Some(ColumnDescriptor::new("id").with_type(SemanticType::Number)),
        Some(ColumnDescriptor::new("name")),
        Some(ColumnDescriptor::new("city")),
        Some(ColumnDescriptor::new("balance").with_type(SemanticType::Money)),
        Some(ColumnDescriptor::new("active").with_type(SemanticType::Boolean)),
        Some(ColumnDescriptor::new("joined").with_type(SemanticType::Time)),
    ]
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");
    for rows in [100usize, 1_000, 10_000] {
        let dataset = build_rows(rows);
        let columns = build_columns();
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, _| {
            b.iter(|| {
                let config =
                    recompute(black_box(&columns), black_box(&dataset), &TableOptions::new())
                        .unwrap();
                black_box(config.total_width)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
