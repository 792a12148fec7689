use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ordo::debug::{fastrand, CollectionGen};
use ordo::{Collection, Key, MutableKeyedCollection};

fn make(n: usize, seed: u64) -> Collection<u64> {
    let mut rng = fastrand::Rng::with_seed(seed);
    CollectionGen::new(n, 0.1, |_, rng: &mut fastrand::Rng| rng.u64(..1000)).gen(&mut rng)
}

pub fn bench_sets(c: &mut Criterion) {
    let a = make(500, 1991);
    let b = make(500, 1992);
    let d = make(500, 1993);
    let mut group = c.benchmark_group("set operations u64");

    group.bench_function("diff", |bch| {
        bch.iter(|| black_box(&a).diff(&[&b, &d]))
    });
    group.bench_function("intersect", |bch| {
        bch.iter(|| black_box(&a).intersect(&[&b, &d]))
    });
    group.bench_function("merge", |bch| {
        bch.iter(|| black_box(&a).merge(&[&b, &d]))
    });
    group.finish();
}

pub fn bench_keyed(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed mutation");

    group.bench_function("add", |bch| {
        bch.iter(|| {
            let mut k: MutableKeyedCollection<i64> = MutableKeyedCollection::with_capacity(1000);
            for i in 0..1000i64 {
                k.add(Key::Int(i), i);
            }
            k
        })
    });
    group.bench_function("remove_by_key front", |bch| {
        let mut rng = fastrand::Rng::with_seed(1991);
        let gen = CollectionGen::new(1000, 0.0, |idx, _: &mut fastrand::Rng| idx);
        let base: MutableKeyedCollection<usize, usize> = gen.gen_keyed(&mut rng, |idx, _| idx);
        bch.iter(|| {
            let mut k = base.clone();
            for i in 0..100usize {
                k.remove_by_key(&i);
            }
            k
        })
    });
    group.finish();
}

criterion_group!(benches, bench_sets, bench_keyed);
criterion_main!(benches);
