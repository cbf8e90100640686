use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use sort_classics_rs::bench::random_sequence;
use sort_classics_rs::sorts::{bubble, insertion, selection};

fn bench_quadratic_sorts(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadratic_sorts");

    let sorts: &[(&str, fn(&mut [i64]))] = &[
        ("insertion", insertion::sort::<i64>),
        ("selection", selection::sort::<i64>),
        ("bubble", bubble::sort::<i64>),
    ];

    for &size in &[25usize, 150, 600, 2500] {
        for (name, sort) in sorts {
            group.bench_with_input(BenchmarkId::new(*name, size), &size, |b, &size| {
                b.iter_batched(
                    || random_sequence(size),
                    |mut data| {
                        sort(&mut data);
                        data
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_quadratic_sorts);
criterion_main!(benches);
