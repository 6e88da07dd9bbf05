use cgmath::Point2;
use criterion::{criterion_group, criterion_main, Criterion};

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use gasket::Triangle;

pub fn gasket_points(c: &mut Criterion) {
    let triangle = Triangle::default();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);

    c.bench_function("gasket_10k", |b| {
        b.iter(|| gasket::generate(10_000, &triangle, Point2::new(0.0, 0.0), &mut rng))
    });
}

criterion_group!(benches, gasket_points);
criterion_main!(benches);
