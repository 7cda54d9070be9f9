use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use custom_collections::ArrayList;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn bench_add_100k(c: &mut Criterion) {
    c.bench_function("array_list::add_100k", |b| {
        b.iter_batched(
            ArrayList::<u64>::new,
            |mut l| {
                for x in lcg(1).take(100_000) {
                    l.add(x);
                }
                black_box(l)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_front_1k(c: &mut Criterion) {
    c.bench_function("array_list::insert_front_1k", |b| {
        b.iter_batched(
            ArrayList::<u64>::new,
            |mut l| {
                for x in lcg(2).take(1_000) {
                    l.insert(0, x).unwrap();
                }
                black_box(l)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_cycle(c: &mut Criterion) {
    c.bench_function("array_list::get_cycle", |b| {
        let mut l = ArrayList::new();
        for x in lcg(3).take(10_000) {
            l.add(x);
        }
        let mut idx = 0usize;
        b.iter(|| {
            black_box(l.get(idx).unwrap());
            idx = (idx + 7919) % l.len();
        })
    });
}

fn bench_quick_sort_random_10k(c: &mut Criterion) {
    c.bench_function("array_list::quick_sort_random_10k", |b| {
        b.iter_batched(
            || {
                let mut l = ArrayList::new();
                for x in lcg(4).take(10_000) {
                    l.add(x);
                }
                l
            },
            |mut l| {
                l.quick_sort();
                black_box(l)
            },
            BatchSize::SmallInput,
        )
    });
}

// Last-element pivot makes sorted input the quadratic case.
fn bench_quick_sort_sorted_1k(c: &mut Criterion) {
    c.bench_function("array_list::quick_sort_sorted_1k", |b| {
        b.iter_batched(
            || {
                let mut l = ArrayList::new();
                for x in 0..1_000u64 {
                    l.add(x);
                }
                l
            },
            |mut l| {
                l.quick_sort();
                black_box(l)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_add_100k, bench_insert_front_1k, bench_get_cycle,
        bench_quick_sort_random_10k, bench_quick_sort_sorted_1k
}
criterion_main!(benches);
