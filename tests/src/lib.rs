//! Fixtures shared by the integration tests and the benchmarks.

use contour::geom::flatten::{CUBIC_STEPS, QUADRATIC_STEPS};
use contour::geom::{CubicBezierSegment, Flattening, LineSegment, QuadraticBezierSegment};
use contour::math::{point, rect, Angle, Point};
use contour::path::builder::PathBuilder;
use contour::path::Path;

pub trait Flatten {
    fn flatten<Cb: FnMut(&LineSegment<f64>)>(curve: &CubicBezierSegment<f64>, cb: &mut Cb);
    fn flatten_quad<Cb: FnMut(&LineSegment<f64>)>(
        curve: &QuadraticBezierSegment<f64>,
        cb: &mut Cb,
    );
}

pub struct FixedStep;
impl Flatten for FixedStep {
    fn flatten<Cb: FnMut(&LineSegment<f64>)>(curve: &CubicBezierSegment<f64>, cb: &mut Cb) {
        curve.for_each_sampled(cb);
    }
    fn flatten_quad<Cb: FnMut(&LineSegment<f64>)>(
        curve: &QuadraticBezierSegment<f64>,
        cb: &mut Cb,
    ) {
        curve.for_each_sampled(cb);
    }
}

pub struct Adaptive;
impl Flatten for Adaptive {
    fn flatten<Cb: FnMut(&LineSegment<f64>)>(curve: &CubicBezierSegment<f64>, cb: &mut Cb) {
        Flattening::ADAPTIVE.for_each_flattened(curve, CUBIC_STEPS, cb);
    }
    fn flatten_quad<Cb: FnMut(&LineSegment<f64>)>(
        curve: &QuadraticBezierSegment<f64>,
        cb: &mut Cb,
    ) {
        Flattening::ADAPTIVE.for_each_flattened(curve, QUADRATIC_STEPS, cb);
    }
}

/// A path exercising every shape generator of the builder.
pub fn build_shapes_path() -> Path {
    let mut builder = Path::builder();
    for i in 0..10 {
        let x = i as f64 * 120.0;
        builder.add_ellipse(&rect(x, 0.0, 100.0, 60.0));
        builder.add_rounded_rect(&rect(x, 100.0, 100.0, 60.0), 15.0, 10.0);
        builder.add_arc(
            point(x + 50.0, 250.0),
            40.0,
            Angle::degrees(i as f64 * 30.0),
            Angle::degrees(300.0),
            i % 2 == 0,
        );
        builder.close();
        builder.move_to(point(x, 320.0));
        builder.add_arc_to(point(x + 100.0, 320.0), point(x + 100.0, 400.0), 20.0);
        builder.quadratic_bezier_to(point(x + 50.0, 450.0), point(x, 400.0));
        builder.close();
    }

    builder.build()
}

// Collects every edge of a path as a cubic bézier curve.
struct CubicBeziers {
    current: Point,
    first: Point,
    curves: Vec<CubicBezierSegment<f64>>,
}

impl PathBuilder for CubicBeziers {
    fn move_to(&mut self, to: Point) {
        self.current = to;
        self.first = to;
    }
    fn line_to(&mut self, to: Point) {
        let from = self.current;
        self.curves.push(CubicBezierSegment {
            from,
            ctrl1: from,
            ctrl2: from.lerp(to, 0.5),
            to,
        });
        self.current = to;
    }
    fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        let from = self.current;
        self.curves
            .push(QuadraticBezierSegment { from, ctrl, to }.to_cubic());
        self.current = to;
    }
    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        let from = self.current;
        self.curves.push(CubicBezierSegment {
            from,
            ctrl1,
            ctrl2,
            to,
        });
        self.current = to;
    }
    fn close(&mut self) {
        self.current = self.first;
    }
    fn current_position(&self) -> Option<Point> {
        Some(self.current)
    }
}

pub fn generate_bezier_curves() -> Vec<CubicBezierSegment<f64>> {
    let mut collector = CubicBeziers {
        current: point(0.0, 0.0),
        first: point(0.0, 0.0),
        curves: Vec::new(),
    };
    collector.add_path(&build_shapes_path());

    collector.curves
}

pub fn generate_quadratic_curves() -> Vec<QuadraticBezierSegment<f64>> {
    generate_bezier_curves()
        .iter()
        .map(|c| QuadraticBezierSegment {
            from: c.from,
            ctrl: c.ctrl1.lerp(c.ctrl2, 0.5),
            to: c.to,
        })
        .collect()
}
