//! Basic benchmarks for the `ic_list` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::iter;
use std::time::Instant;

use alloc_tracker::Allocator;
use criterion::{Criterion, criterion_group, criterion_main};
use ic_list::List;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

#[global_allocator]
static ALLOCATOR: Allocator<std::alloc::System> = Allocator::system();

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;

fn entrypoint(c: &mut Criterion) {
    let allocs = alloc_tracker::Session::new();

    let mut group = c.benchmark_group("list_basic");

    let allocs_op = allocs.operation("append_one");
    group.bench_function("append_one", |b| {
        b.iter_custom(|iters| {
            let mut lists = iter::repeat_with(List::<TestItem>::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for list in &mut lists {
                list.append(black_box(TEST_VALUE));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("prepend_one");
    group.bench_function("prepend_one", |b| {
        b.iter_custom(|iters| {
            let mut lists = iter::repeat_with(List::<TestItem>::new)
                .take(usize::try_from(iters).unwrap())
                .collect::<Vec<_>>();

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for list in &mut lists {
                list.prepend(black_box(TEST_VALUE));
            }

            start.elapsed()
        });
    });

    let allocs_op = allocs.operation("nth_middle_of_1k");
    group.bench_function("nth_middle_of_1k", |b| {
        b.iter_custom(|iters| {
            let mut list = List::new();
            for _ in 0..1000 {
                list.append(TEST_VALUE);
            }

            let _span = allocs_op.measure_thread().iterations(iters);

            let start = Instant::now();

            for _ in 0..iters {
                _ = black_box(list.nth_data(black_box(500)));
            }

            start.elapsed()
        });
    });

    group.finish();

    allocs.print_to_stdout();
}
