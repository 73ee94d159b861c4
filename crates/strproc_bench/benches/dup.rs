//! Duplication benchmarks.
//!
//! The size ladder matches the inputs the binding overhead was originally
//! measured with: a short literal plus 100, 1000, and 10000 byte runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strproc_core::{duplicate, duplicate_str, try_duplicate};

/// Benchmark byte-buffer duplication across input sizes.
fn bench_duplicate(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicate");

    group.bench_function("short", |b| {
        let input = b"Hello, World!";
        b.iter(|| {
            let output = duplicate(black_box(input));
            black_box(output);
        });
    });

    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let input = vec![b'A'; size];
            b.iter(|| {
                let output = duplicate(black_box(&input));
                black_box(output);
            });
        });
    }

    group.finish();
}

/// Benchmark the fallible path, which pays an extra reserve check.
fn bench_try_duplicate(c: &mut Criterion) {
    let mut group = c.benchmark_group("try_duplicate");

    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let input = vec![b'B'; size];
            b.iter(|| {
                let output = try_duplicate(black_box(&input)).unwrap();
                black_box(output);
            });
        });
    }

    group.finish();
}

/// Benchmark string duplication, the path the Python binding takes.
fn bench_duplicate_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("duplicate_str");

    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let input = "C".repeat(size);
            b.iter(|| {
                let output = duplicate_str(black_box(&input));
                black_box(output);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_duplicate,
    bench_try_duplicate,
    bench_duplicate_str
);
criterion_main!(benches);
