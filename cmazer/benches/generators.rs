use cmazer::{generate, AldousBroder, BinaryTree, Dims, Sidewinder, Wilsons};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SIZE: Dims = Dims(30, 30);
const SEED: u64 = 7;

pub fn binary_tree(c: &mut Criterion) {
    c.bench_function("binary_tree", |b| {
        b.iter(|| generate(&BinaryTree, black_box(SIZE), Some(SEED)).unwrap())
    });
}

pub fn sidewinder(c: &mut Criterion) {
    c.bench_function("sidewinder", |b| {
        b.iter(|| generate(&Sidewinder, black_box(SIZE), Some(SEED)).unwrap())
    });
}

pub fn aldous_broder(c: &mut Criterion) {
    c.bench_function("aldous_broder", |b| {
        b.iter(|| generate(&AldousBroder, black_box(SIZE), Some(SEED)).unwrap())
    });
}

pub fn wilsons(c: &mut Criterion) {
    c.bench_function("wilsons", |b| {
        b.iter(|| generate(&Wilsons, black_box(SIZE), Some(SEED)).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = binary_tree, sidewinder, aldous_broder, wilsons}
criterion_main!(benches);
