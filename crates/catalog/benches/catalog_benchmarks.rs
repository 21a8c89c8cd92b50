use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockroom_catalog::{Catalog, MemoryStore, NewItem};
use stockroom_core::ItemId;

fn populated_catalog(items: usize, quantity: i64) -> Catalog<MemoryStore> {
    let mut catalog = Catalog::new(MemoryStore::new());
    for n in 0..items {
        catalog
            .ingest(NewItem {
                name: format!("item-{n}"),
                initial_quantity: quantity,
                reorder_threshold: (n % 50) as i64,
                unit_price_cents: 100,
            })
            .expect("ingest into bench catalog");
    }
    catalog
}

fn bench_list_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_all");

    for size in [10usize, 100, 1_000, 10_000] {
        let catalog = populated_catalog(size, 1_000);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| {
                let lines = catalog.list_all().unwrap();
                black_box(lines.len())
            });
        });
    }

    group.finish();
}

fn bench_withdraw(c: &mut Criterion) {
    let mut group = c.benchmark_group("withdraw");
    group.sample_size(1_000);

    // Quantities large enough that the benchmark loop never drains an item.
    for size in [100usize, 10_000] {
        let mut catalog = populated_catalog(size, i64::MAX / 2);
        let target = ItemId::new((size / 2) as i64).unwrap();
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                let balance = catalog.withdraw(black_box(target), 1).unwrap();
                black_box(balance)
            });
        });
    }

    group.finish();
}

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest");
    group.sample_size(1_000);

    group.bench_function("into_populated_catalog", |b| {
        let mut catalog = populated_catalog(1_000, 1_000);
        b.iter(|| {
            let item = catalog
                .ingest(NewItem {
                    name: black_box("Webcam HD".to_string()),
                    initial_quantity: 15,
                    reorder_threshold: 8,
                    unit_price_cents: 4_500,
                })
                .unwrap();
            black_box(item.id)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_list_all, bench_withdraw, bench_ingest);
criterion_main!(benches);
