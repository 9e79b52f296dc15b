use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use apothecary_core::Expiry;
use apothecary_inventory::{Drug, Pharmacy, Variant};

/// Shelf of `size` drugs cycling through every variant with varied start states.
fn shelf(size: usize) -> Pharmacy {
    (0..size)
        .map(|i| {
            let variant = Variant::ALL[i % Variant::ALL.len()];
            let expires_in = if variant.expires() {
                Expiry::Days((i % 30) as i32)
            } else {
                Expiry::Never
            };
            Drug::new(format!("drug-{i}"), expires_in, (i % 51) as i64, variant).unwrap()
        })
        .collect()
}

fn bench_advance_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_day");

    for size in [10usize, 1_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter_batched(
                || shelf(size),
                |mut pharmacy| {
                    black_box(pharmacy.advance_day().len());
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_simulate_month(c: &mut Criterion) {
    c.bench_function("simulate_30_days_1000_drugs", |b| {
        b.iter_batched(
            || shelf(1_000),
            |mut pharmacy| black_box(pharmacy.simulate(30)),
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_advance_day, bench_simulate_month);
criterion_main!(benches);
