//! Basic benchmarks for the `ic_vector` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use alloc_tracker::Allocator;
use criterion::{Criterion, criterion_group, criterion_main};
use ic_vector::Vector;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;
const GROWTH_STEP: usize = 16;

fn filled(count: usize) -> Vector<TestItem> {
    let mut vector = Vector::new(GROWTH_STEP).unwrap();

    for value in 0..count {
        vector.append(value);
    }

    vector
}

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("vector_basic");

    let allocs_op = allocs.operation("build_empty");
    group.bench_function("build_empty", |b| {
        b.iter_custom(|iters| {
            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                drop(black_box(Vector::<TestItem>::new(GROWTH_STEP).unwrap()));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("append_1k");
    group.bench_function("append_1k", |b| {
        b.iter_custom(|iters| {
            let mut vectors = iter::repeat_with(|| Vector::new(GROWTH_STEP).unwrap())
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for vector in &mut vectors {
                for _ in 0..1000 {
                    vector.append(black_box(TEST_VALUE));
                }
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("insert_front_of_1k");
    group.bench_function("insert_front_of_1k", |b| {
        b.iter_custom(|iters| {
            let mut vectors = iter::repeat_with(|| filled(1000))
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for vector in &mut vectors {
                vector.insert(black_box(TEST_VALUE), 0).unwrap();
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("binary_search_10k");
    group.bench_function("binary_search_10k", |b| {
        b.iter_custom(|iters| {
            let vector = filled(10_000);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(vector.search(
                    Some(black_box(&7_777)),
                    TestItem::cmp,
                    0,
                    true,
                ));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("linear_search_10k");
    group.bench_function("linear_search_10k", |b| {
        b.iter_custom(|iters| {
            let vector = filled(10_000);

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(vector.search(
                    Some(black_box(&7_777)),
                    TestItem::cmp,
                    0,
                    false,
                ));
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
