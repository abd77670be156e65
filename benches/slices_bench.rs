//! Slice helper benchmarks.
//!
//! Measures the hash-based helpers across input sizes. Run with
//! `--features fxhash` or `--features ahash` to compare hashers.
//!
//! Inputs are pre-generated and cloned in setup so that generation cost is
//! not part of the measurement.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use utilkit::slices::{cross, is_equal, slice_diff, slice_intersect, union, unique};

const SIZES: [u32; 3] = [100, 1_000, 10_000];

/// Values in `0..size` where roughly every other value is repeated.
fn generate_with_duplicates(size: u32) -> Vec<u32> {
    (0..size).map(|value| value / 2).collect()
}

fn benchmark_unique(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("slices_unique");

    for size in SIZES {
        let base_vec = generate_with_duplicates(size);
        group.bench_with_input(BenchmarkId::new("unique", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |values| black_box(unique(black_box(values))),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_set_algebra(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("slices_set_algebra");

    for size in SIZES {
        let left: Vec<u32> = (0..size).collect();
        let right: Vec<u32> = (size / 2..size + size / 2).collect();
        let sequences = [left.clone(), right.clone()];

        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(union(black_box(&left), black_box(&right))));
        });
        group.bench_with_input(BenchmarkId::new("cross", size), &size, |bencher, _| {
            bencher.iter(|| black_box(cross(black_box(&left), black_box(&right))));
        });
        let id = BenchmarkId::new("slice_intersect", size);
        group.bench_with_input(id, &size, |bencher, _| {
            bencher.iter(|| black_box(slice_intersect(black_box(&sequences))));
        });
        let id = BenchmarkId::new("slice_diff", size);
        group.bench_with_input(id, &size, |bencher, _| {
            bencher.iter(|| black_box(slice_diff(black_box(&sequences))));
        });
    }

    group.finish();
}

fn benchmark_is_equal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("slices_is_equal");

    for size in SIZES {
        let left: Vec<u32> = (0..size).collect();
        let right: Vec<u32> = left.iter().rev().copied().collect();

        group.bench_with_input(BenchmarkId::new("reversed", size), &size, |bencher, _| {
            bencher.iter(|| black_box(is_equal(black_box(&left), black_box(&right))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_unique,
    benchmark_set_algebra,
    benchmark_is_equal
);

criterion_main!(benches);
