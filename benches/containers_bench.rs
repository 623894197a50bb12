use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use cursor_collections::{LinkedList, UnorderedMap, Vector};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_vector_push_100k(c: &mut Criterion) {
    c.bench_function("vector::push_back_100k", |b| {
        b.iter_batched(
            Vector::<u64>::new,
            |mut v| {
                for x in lcg(1).take(100_000) {
                    v.push_back(x);
                }
                black_box(v)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_vector_push_reserved_100k(c: &mut Criterion) {
    c.bench_function("vector::push_back_reserved_100k", |b| {
        b.iter_batched(
            || Vector::<u64>::with_capacity(100_000),
            |mut v| {
                for x in lcg(2).take(100_000) {
                    v.push_back(x);
                }
                black_box(v)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_vector_insert_front_10k(c: &mut Criterion) {
    c.bench_function("vector::insert_front_10k", |b| {
        b.iter_batched(
            Vector::<u64>::new,
            |mut v| {
                for x in lcg(3).take(10_000) {
                    v.insert(v.begin(), x).unwrap();
                }
                black_box(v)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_list_push_100k(c: &mut Criterion) {
    c.bench_function("list::push_back_100k", |b| {
        b.iter_batched(
            LinkedList::<u64>::new,
            |mut l| {
                for x in lcg(4).take(100_000) {
                    l.push_back(x);
                }
                black_box(l)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_list_splice_middle_10k(c: &mut Criterion) {
    c.bench_function("list::insert_middle_10k", |b| {
        b.iter_batched(
            || {
                let mut l: LinkedList<u64> = (0..2u64).collect();
                let mid = l.begin().advance(&l, 1).unwrap();
                (l, mid)
            },
            |(mut l, mid)| {
                // The anchor cursor stays valid throughout; every insert is
                // an O(1) relink at the same position.
                for x in lcg(5).take(10_000) {
                    l.insert(mid, x).unwrap();
                }
                black_box(l)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_map_insert_fresh_100k(c: &mut Criterion) {
    c.bench_function("map::insert_fresh_100k", |b| {
        b.iter_batched(
            UnorderedMap::<String, u64>::new,
            |mut m| {
                for (i, x) in lcg(6).take(100_000).enumerate() {
                    m.insert(key(x), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_map_insert_reserved_100k(c: &mut Criterion) {
    c.bench_function("map::insert_reserved_100k", |b| {
        b.iter_batched(
            || {
                let mut m = UnorderedMap::<String, u64>::new();
                m.reserve(100_000);
                m
            },
            |mut m| {
                for (i, x) in lcg(7).take(100_000).enumerate() {
                    m.insert(key(x), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_map_lookup_hit_100k(c: &mut Criterion) {
    c.bench_function("map::lookup_hit_100k", |b| {
        b.iter_batched(
            || {
                let mut m = UnorderedMap::<String, u64>::new();
                let keys: Vec<String> = lcg(8).take(100_000).map(key).collect();
                for (i, k) in keys.iter().enumerate() {
                    m.insert(k.clone(), i as u64);
                }
                (m, keys)
            },
            |(m, keys)| {
                let mut acc = 0u64;
                for k in &keys {
                    acc = acc.wrapping_add(*m.get(k.as_str()).unwrap());
                }
                black_box(acc)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_map_iterate_100k(c: &mut Criterion) {
    c.bench_function("map::iterate_100k", |b| {
        b.iter_batched(
            || {
                let mut m = UnorderedMap::<u64, u64>::new();
                for x in lcg(9).take(100_000) {
                    m.insert(x, x);
                }
                m
            },
            |m| {
                let mut acc = 0u64;
                for (_, v) in m.iter() {
                    acc = acc.wrapping_add(*v);
                }
                black_box(acc)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_vector_push_100k,
    bench_vector_push_reserved_100k,
    bench_vector_insert_front_10k,
    bench_list_push_100k,
    bench_list_splice_middle_10k,
    bench_map_insert_fresh_100k,
    bench_map_insert_reserved_100k,
    bench_map_lookup_hit_100k,
    bench_map_iterate_100k,
);
criterion_main!(benches);
