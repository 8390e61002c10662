// benches/reorder_bench.rs

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use groupsort::input::{InputSource, RandomSource};
use groupsort::{GroupReorderer, LinkedList};

// Whole-list reordering at increasing lengths
fn bench_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reorder-GroupSize4");
    let reorderer = GroupReorderer::<4>::new();

    for len in [4usize, 64, 1024, 16384].iter() {
        group.bench_with_input(BenchmarkId::new("reorder", len), len, |b, &len| {
            b.iter_batched(
                // Setup: a fresh list per iteration, since reordering mutates it
                || {
                    (0..len as i32)
                        .map(|v| if v % 3 == 0 { -v } else { v })
                        .collect::<LinkedList>()
                },
                |mut list| {
                    reorderer.reorder(black_box(&mut list)).unwrap();
                    list
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// Same number of elements spread over groups of different sizes
fn bench_group_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reorder-GroupSizes");
    let values: Vec<i32> = (0..4800).map(|v| if v % 2 == 0 { v } else { -v }).collect();

    group.bench_function("size_2", |b| {
        let reorderer = GroupReorderer::<2>::new();
        b.iter_batched(
            || values.iter().copied().collect::<LinkedList>(),
            |mut list| reorderer.reorder(&mut list).unwrap(),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("size_16", |b| {
        let reorderer = GroupReorderer::<16>::new();
        b.iter_batched(
            || values.iter().copied().collect::<LinkedList>(),
            |mut list| reorderer.reorder(&mut list).unwrap(),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

// Full run: generate, reorder, release
fn bench_random_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("Reorder-Pipeline");
    let reorderer = GroupReorderer::<4>::new();

    group.bench_function("random_build_reorder_release", |b| {
        let mut source = RandomSource::<_, 4>::new(StdRng::seed_from_u64(1));
        b.iter(|| {
            let mut list = source.build().unwrap();
            reorderer.reorder(&mut list).unwrap();
            black_box(list.release())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_reorder,
    bench_group_sizes,
    bench_random_pipeline
);
criterion_main!(benches);
