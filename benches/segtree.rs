use criterion::{black_box, criterion_group, criterion_main, Bencher, Criterion};
use ps_library::SegTree;

const N: usize = 1 << 16;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("segtree");
    group.bench_function("build_sum_65536", build);
    group.bench_function("range_sum", range_sum);
    group.bench_function("point_set", point_set);
    group.finish();
}

fn values() -> Vec<u64> {
    (0..N).map(|_| fastrand::u64(..1_000_000)).collect()
}

fn build(bencher: &mut Bencher) {
    let xs = values();
    bencher.iter(|| black_box(SegTree::new(xs.iter().copied(), |a: &u64, b: &u64| a + b)));
}

fn range_sum(bencher: &mut Bencher) {
    let tree = SegTree::new(values(), |a: &u64, b: &u64| a + b);
    bencher.iter(|| {
        let (a, b) = (fastrand::usize(..N), fastrand::usize(..N));
        black_box(tree.get(a.min(b), a.max(b)))
    });
}

fn point_set(bencher: &mut Bencher) {
    let mut tree = SegTree::new(values(), |a: &u64, b: &u64| a + b);
    bencher.iter(|| {
        let idx = fastrand::usize(..N);
        black_box(tree.set(idx, fastrand::u64(..1_000_000)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
