#[macro_use]
extern crate criterion;

use contour::geom::{CubicBezierSegment, QuadraticBezierSegment};
use contour_tests::*;

use criterion::Criterion;

const N: usize = 10;

fn bench_flatten<A: Flatten>(curves: &[CubicBezierSegment<f64>]) {
    for _ in 0..N {
        for curve in curves {
            A::flatten(curve, &mut |seg| {
                std::hint::black_box(seg);
            });
        }
    }
}

fn bench_flatten_quad<A: Flatten>(curves: &[QuadraticBezierSegment<f64>]) {
    for _ in 0..N {
        for curve in curves {
            A::flatten_quad(curve, &mut |seg| {
                std::hint::black_box(seg);
            });
        }
    }
}

fn cubic_flatten(c: &mut Criterion) {
    let curves = generate_bezier_curves();
    let mut g = c.benchmark_group("cubic");
    g.bench_function("fixed-step", |b| b.iter(|| bench_flatten::<FixedStep>(&curves)));
    g.bench_function("adaptive", |b| b.iter(|| bench_flatten::<Adaptive>(&curves)));
}

fn quad_flatten(c: &mut Criterion) {
    let curves = generate_quadratic_curves();
    let mut g = c.benchmark_group("quadratic");
    g.bench_function("fixed-step", |b| b.iter(|| bench_flatten_quad::<FixedStep>(&curves)));
    g.bench_function("adaptive", |b| b.iter(|| bench_flatten_quad::<Adaptive>(&curves)));
}

criterion_group!(flatten, cubic_flatten, quad_flatten);
criterion_main!(flatten);
