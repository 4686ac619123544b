use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockroom_catalog::{Product, ProductId};
use stockroom_export::csv::{encode, Column};

fn columns() -> [Column<Product>; 4] {
    [
        Column {
            title: "ID",
            value: |p| p.id.to_string(),
        },
        Column {
            title: "Name",
            value: |p| p.name.clone(),
        },
        Column {
            title: "Price",
            value: |p| p.price.to_string(),
        },
        Column {
            title: "Quantity",
            value: |p| p.quantity.to_string(),
        },
    ]
}

fn rows(n: usize) -> Vec<Product> {
    (1..=n)
        .map(|i| Product {
            id: ProductId::new(i as i64),
            // Force the quoting path on every other row.
            name: if i % 2 == 0 {
                format!("vendor-{i}, intl")
            } else {
                format!("vendor-{i}")
            },
            price: i as f64 * 1.25,
            quantity: (i % 100) as i64,
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_encode");

    for &size in &[10usize, 100, 1000] {
        let data = rows(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(&columns()), black_box(data)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
