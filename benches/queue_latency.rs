//! Insert and extract-min latency for both addressing backends
//!
//! Each benchmark performs `n` sequential operations on a fresh queue, so the
//! reported time divided by `n` is the mean per-operation latency.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench queue_latency
//!
//! # Only the indexed backend
//! cargo bench --bench queue_latency -- dense
//! ```
//!
//! The walking backend locates every position from the head of the chain, so
//! its sizes are kept small; the indexed backend runs the full 10,000 ops.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use linked_heap::index::{DenseIndex, NodeIndex, WalkIndex};
use linked_heap::{IndexedMinPriorityQueue, MinPriorityQueue, PriorityQueue};

const WALK_SIZES: [i64; 3] = [250, 500, 1_000];
const DENSE_SIZES: [i64; 3] = [1_000, 5_000, 10_000];

fn filled<I: NodeIndex<i64>>(n: i64) -> MinPriorityQueue<i64, I> {
    (0..n).collect()
}

fn insert_all<I: NodeIndex<i64>>(n: i64) -> MinPriorityQueue<i64, I> {
    let mut queue = MinPriorityQueue::new();
    for key in 0..n {
        queue.insert(black_box(key));
    }
    queue
}

fn extract_all<I: NodeIndex<i64>>(mut queue: MinPriorityQueue<i64, I>) -> i64 {
    let mut last = 0;
    while let Some(key) = queue.extract_min() {
        last = key;
    }
    last
}

/// Sequential inserts of `0..n`
fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.sample_size(20);

    for &n in &WALK_SIZES {
        group.bench_with_input(BenchmarkId::new("walk", n), &n, |b, &n| {
            b.iter(|| black_box(insert_all::<WalkIndex>(n)));
        });
    }

    for &n in &DENSE_SIZES {
        group.bench_with_input(BenchmarkId::new("dense", n), &n, |b, &n| {
            b.iter(|| black_box(insert_all::<DenseIndex<i64>>(n)));
        });
    }

    group.finish();
}

/// Draining a queue that holds `0..n`
fn benchmark_extract_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_min");
    group.sample_size(10);

    for &n in &WALK_SIZES {
        group.bench_with_input(BenchmarkId::new("walk", n), &n, |b, &n| {
            b.iter_batched(
                || filled::<WalkIndex>(n),
                |queue| black_box(extract_all(queue)),
                BatchSize::LargeInput,
            );
        });
    }

    for &n in &DENSE_SIZES {
        group.bench_with_input(BenchmarkId::new("dense", n), &n, |b, &n| {
            b.iter_batched(
                || -> IndexedMinPriorityQueue<i64> { filled(n) },
                |queue| black_box(extract_all(queue)),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_insert, benchmark_extract_min);

criterion_main!(benches);
