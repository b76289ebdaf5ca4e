//! Binary search over index cursors against node cursors.
//!
//! Run with: cargo bench
//!
//! Both searches perform the same comparisons; the gap between them is the
//! cost of moving a node cursor to each midpoint.

use std::iter::FromIterator;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dsa_kit::search::{binary_search, linear_search};
use dsa_kit::sort::{insertion_sort, InsertionStrategy};
use dsa_kit::traits::{Traverse, TraverseMut};
use dsa_kit::{DoublyLinkedList, DynamicArray, SinglyLinkedList};

const LEN: u64 = 4_096;
const LOOKUPS: u64 = 64;

fn targets() -> impl Iterator<Item = u64> {
    (0..LOOKUPS).map(|i| i * (LEN / LOOKUPS) + 1)
}

// ============================================================================
// Search Benchmarks
// ============================================================================

fn bench_binary_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_search");
    group.throughput(Throughput::Elements(LOOKUPS));

    let array = DynamicArray::from_iter(0..LEN);
    let list = DoublyLinkedList::from_iter(0..LEN);

    group.bench_function("index_cursor", |b| {
        let (begin, end) = array.range();
        b.iter(|| {
            for target in targets() {
                black_box(binary_search(&begin, &end, &target, u64::cmp, None));
            }
        });
    });

    group.bench_function("node_cursor", |b| {
        let (begin, end) = list.range();
        b.iter(|| {
            for target in targets() {
                black_box(binary_search(&begin, &end, &target, u64::cmp, None));
            }
        });
    });

    group.finish();
}

fn bench_linear_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_search");
    group.throughput(Throughput::Elements(LOOKUPS));

    let array = DynamicArray::from_iter(0..LEN);
    let list = DoublyLinkedList::from_iter(0..LEN);

    group.bench_function("index_cursor", |b| {
        let (begin, end) = array.range();
        b.iter(|| {
            for target in targets() {
                black_box(linear_search(&begin, &end, &target, u64::cmp, None));
            }
        });
    });

    group.bench_function("node_cursor", |b| {
        let (begin, end) = list.range();
        b.iter(|| {
            for target in targets() {
                black_box(linear_search(&begin, &end, &target, u64::cmp, None));
            }
        });
    });

    group.finish();
}

// ============================================================================
// Sort Benchmarks
// ============================================================================

fn bench_insertion_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("insertion_sort");
    let input: Vec<u64> = (0..256u64).map(|i| (i * 7919) % 256).collect();
    group.throughput(Throughput::Elements(input.len() as u64));

    for (name, strategy) in [
        ("linear", InsertionStrategy::Linear),
        ("binary", InsertionStrategy::Binary),
    ] {
        group.bench_function(format!("array/{}", name), |b| {
            b.iter(|| {
                let mut array = DynamicArray::from_iter(input.iter().copied());
                let (begin, end) = array.range_mut();
                black_box(insertion_sort(&begin, &end, u64::cmp, strategy, None)).ok();
            });
        });

        group.bench_function(format!("singly/{}", name), |b| {
            b.iter(|| {
                let mut list = SinglyLinkedList::from_iter(input.iter().copied());
                let (begin, end) = list.range_mut();
                black_box(insertion_sort(&begin, &end, u64::cmp, strategy, None)).ok();
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_binary_search,
    bench_linear_search,
    bench_insertion_sort
);
criterion_main!(benches);
