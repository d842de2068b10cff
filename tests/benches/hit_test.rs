#[macro_use]
extern crate criterion;

use contour::algorithms::hit_test::contains;
use contour::algorithms::stroke::{outline, LineCap, LineJoin};
use contour::math::{point, Transform};
use contour::path::FillRule;
use contour_tests::build_shapes_path;

use criterion::Criterion;

fn hit_test(c: &mut Criterion) {
    let path = build_shapes_path();
    let transform = Transform::scale(0.5, 0.5);
    c.bench_function("contains", |b| {
        b.iter(|| {
            let mut inside = 0;
            for i in 0..60 {
                let p = point(i as f64 * 10.0, (i % 23) as f64 * 10.0);
                if contains(p, &path, FillRule::NonZero, &transform) {
                    inside += 1;
                }
            }
            std::hint::black_box(inside);
        })
    });
}

fn stroke(c: &mut Criterion) {
    let path = build_shapes_path();
    let identity = Transform::identity();
    let mut g = c.benchmark_group("outline");
    for (name, join) in [
        ("miter", LineJoin::Miter),
        ("round", LineJoin::Round),
        ("bevel", LineJoin::Bevel),
    ] {
        g.bench_function(name, |b| {
            b.iter(|| outline(&path, 3.0, LineCap::Round, join, 4.0, &identity))
        });
    }
}

criterion_group!(algorithms, hit_test, stroke);
criterion_main!(algorithms);
