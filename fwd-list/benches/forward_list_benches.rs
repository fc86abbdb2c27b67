use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fwd_list::ForwardList;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use std::hint::black_box;

const SIZES: &[usize] = &[100, 1_000, 10_000];

fn random_values(len: usize) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(len as u64);
    (0..len).map(|_| rng.random()).collect()
}

fn push_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for &size in SIZES {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("push_front", size), &values, |b, values| {
            b.iter(|| {
                let mut list = ForwardList::new();
                for &value in values {
                    list.push_front(value);
                }
                black_box(list)
            })
        });

        // Appending through a single cursor avoids walking the list for every element.
        group.bench_with_input(BenchmarkId::new("extend", size), &values, |b, values| {
            b.iter(|| {
                let mut list = ForwardList::new();
                list.extend(values.iter().copied());
                black_box(list)
            })
        });
    }

    // `push_back` walks the whole list, keep the sizes small.
    for &size in &SIZES[..2] {
        let values = random_values(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("push_back", size), &values, |b, values| {
            b.iter(|| {
                let mut list = ForwardList::new();
                for &value in values {
                    list.push_back(value);
                }
                black_box(list)
            })
        });
    }

    group.finish();
}

fn traverse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");

    for &size in SIZES {
        let list = random_values(size).into_iter().collect::<ForwardList<_>>();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("iter_sum", size), &list, |b, list| {
            b.iter(|| black_box(list.iter().fold(0u64, |acc, x| acc.wrapping_add(*x))))
        });

        group.bench_with_input(BenchmarkId::new("clone", size), &list, |b, list| {
            b.iter(|| black_box(list.clone()))
        });

        group.bench_with_input(BenchmarkId::new("retain_even", size), &list, |b, list| {
            b.iter_with_setup(
                || list.clone(),
                |mut copy| {
                    copy.retain(|x| *x % 2 == 0);
                    black_box(copy)
                },
            )
        });
    }

    group.finish();
}

fn cursor_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor");
    let mut rng = StdRng::seed_from_u64(0);

    for &size in SIZES {
        let list = random_values(size).into_iter().collect::<ForwardList<_>>();
        let positions = (0..64)
            .map(|_| rng.random_range(0..size))
            .collect::<Vec<_>>();

        group.bench_with_input(
            BenchmarkId::new("insert_erase_after", size),
            &positions,
            |b, positions| {
                b.iter_with_setup(
                    || list.clone(),
                    |mut copy| {
                        for &position in positions {
                            let mut cursor = copy.before_begin_mut();
                            for _ in 0..position {
                                cursor.move_next();
                            }
                            cursor.insert_after(position as u64);
                            cursor.erase_after();
                        }
                        black_box(copy)
                    },
                )
            },
        );
    }

    group.finish();
}

criterion_group!(benches, push_benchmark, traverse_benchmark, cursor_benchmark);
criterion_main!(benches);
