//! Benchmarks for the parallel chunked reduction across worker counts.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use parbench::reduce::chunked_sum;
use std::hint::black_box;
use tokio::runtime::Runtime;

fn bench_chunked_sum(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let values: Vec<i64> = (1..=1_000_000).collect();

    let mut group = c.benchmark_group("chunked_sum");
    group.throughput(Throughput::Elements(values.len() as u64));

    for workers in [1usize, 2, 4, 8, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(workers),
            &workers,
            |b, &workers| {
                b.iter(|| {
                    rt.block_on(chunked_sum(black_box(&values), workers))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_sequential_baseline(c: &mut Criterion) {
    let values: Vec<i64> = (1..=1_000_000).collect();

    c.bench_function("sequential_sum", |b| {
        b.iter(|| black_box(&values).iter().copied().sum::<i64>());
    });
}

criterion_group!(benches, bench_chunked_sum, bench_sequential_baseline);
criterion_main!(benches);
