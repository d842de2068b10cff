//! Approximation of curves with sequences of line segments.
//!
//! Two strategies are provided because they serve different purposes:
//!
//! - [`for_each_sampled`] evaluates the curve at a fixed number of evenly spaced
//!   parameter values. The number of generated segments only depends on the kind of
//!   curve which makes the output predictable. This is what stroke outlining uses.
//! - [`for_each_subdivided`] recursively splits the curve at `t = 0.5` (de Casteljau)
//!   until each piece is flat enough. Precision is concentrated where the curve bends,
//!   which matters for point containment near self-intersections. Recursion stops at
//!   `max_depth` no matter what.

use crate::scalar::Scalar;
use crate::segment::Segment;
use crate::LineSegment;

/// Number of segments generated when sampling a quadratic bézier curve.
pub const QUADRATIC_STEPS: u32 = 8;

/// Number of segments generated when sampling a cubic bézier curve.
pub const CUBIC_STEPS: u32 = 12;

/// Flatness under which a curve piece is replaced by its baseline.
pub const DEFAULT_FLATNESS: f32 = 0.5;

/// Maximum recursion depth of the adaptive subdivision.
pub const MAX_SUBDIVISION_DEPTH: u32 = 10;

/// Selects a flattening strategy.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Flattening {
    /// Uniform sampling, see [`for_each_sampled`].
    FixedStep,
    /// Recursive subdivision, see [`for_each_subdivided`].
    Adaptive { tolerance: f32, max_depth: u32 },
}

impl Flattening {
    /// Adaptive subdivision with the default flatness and depth limits.
    pub const ADAPTIVE: Self = Flattening::Adaptive {
        tolerance: DEFAULT_FLATNESS,
        max_depth: MAX_SUBDIVISION_DEPTH,
    };

    /// Flattens a curve according to this strategy.
    ///
    /// `steps` is only used by the fixed-step strategy.
    pub fn for_each_flattened<Seg, F>(&self, curve: &Seg, steps: u32, callback: &mut F)
    where
        Seg: Segment,
        F: FnMut(&LineSegment<Seg::Scalar>),
    {
        match *self {
            Flattening::FixedStep => for_each_sampled(curve, steps, callback),
            Flattening::Adaptive {
                tolerance,
                max_depth,
            } => for_each_subdivided(
                curve,
                Seg::Scalar::value(tolerance),
                max_depth,
                callback,
            ),
        }
    }
}

impl Default for Flattening {
    fn default() -> Self {
        Flattening::FixedStep
    }
}

/// Approximates a curve with `steps` line segments by sampling it at evenly spaced
/// parameter values.
///
/// The last segment always ends exactly at the end of the curve.
/// Nothing is generated if `steps` is zero.
pub fn for_each_sampled<Seg, F>(curve: &Seg, steps: u32, callback: &mut F)
where
    Seg: Segment,
    F: FnMut(&LineSegment<Seg::Scalar>),
{
    if steps == 0 {
        return;
    }

    let step = Seg::Scalar::ONE / Seg::Scalar::value(steps as f32);
    let mut from = curve.from();
    for i in 1..steps {
        let to = curve.sample(step * Seg::Scalar::value(i as f32));
        callback(&LineSegment { from, to });
        from = to;
    }

    callback(&LineSegment {
        from,
        to: curve.to(),
    });
}

/// Approximates a curve by de Casteljau subdivision.
///
/// A piece of the curve is emitted as a line segment once its flatness drops below
/// `tolerance` or once it is `max_depth` subdivisions deep. At most `2^max_depth`
/// segments are generated.
pub fn for_each_subdivided<Seg, F>(
    curve: &Seg,
    tolerance: Seg::Scalar,
    max_depth: u32,
    callback: &mut F,
) where
    Seg: Segment,
    F: FnMut(&LineSegment<Seg::Scalar>),
{
    subdivide(curve, tolerance, 0, max_depth, callback);
}

fn subdivide<Seg, F>(curve: &Seg, tolerance: Seg::Scalar, depth: u32, max_depth: u32, callback: &mut F)
where
    Seg: Segment,
    F: FnMut(&LineSegment<Seg::Scalar>),
{
    // The negated comparison sends NaN flatness to the baseline instead of recursing.
    if depth >= max_depth || !(curve.flatness() >= tolerance) {
        callback(&curve.baseline());
        return;
    }

    let (a, b) = curve.split(Seg::Scalar::HALF);
    subdivide(&a, tolerance, depth + 1, max_depth, callback);
    subdivide(&b, tolerance, depth + 1, max_depth, callback);
}

#[cfg(test)]
use crate::{point, CubicBezierSegment, Point, QuadraticBezierSegment};

#[cfg(test)]
fn collect<Seg: Segment<Scalar = f64>>(
    curve: &Seg,
    flattening: Flattening,
    steps: u32,
) -> std::vec::Vec<LineSegment<f64>> {
    let mut segments = std::vec::Vec::new();
    flattening.for_each_flattened(curve, steps, &mut |s| segments.push(*s));
    segments
}

#[test]
fn fixed_step_segment_count() {
    let quadratic = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };
    let mut n = 0;
    quadratic.for_each_sampled(&mut |_| n += 1);
    assert_eq!(n, QUADRATIC_STEPS);

    let cubic = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(2.0, 1.0),
        to: point(3.0, 0.0),
    };
    let segments = collect(&cubic, Flattening::FixedStep, CUBIC_STEPS);
    assert_eq!(segments.len(), CUBIC_STEPS as usize);

    // Sampling does not depend on the shape of the curve.
    let straight = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0, 0.0),
        ctrl2: point(2.0, 0.0),
        to: point(3.0, 0.0),
    };
    assert_eq!(
        collect(&straight, Flattening::FixedStep, CUBIC_STEPS).len(),
        CUBIC_STEPS as usize
    );
}

#[test]
fn flattened_segments_are_connected() {
    let cubic = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(10.0, 40.0),
        ctrl2: point(50.0, -20.0),
        to: point(60.0, 10.0),
    };

    for flattening in [Flattening::FixedStep, Flattening::ADAPTIVE] {
        let segments = collect(&cubic, flattening, CUBIC_STEPS);
        assert_eq!(segments[0].from, cubic.from);
        assert_eq!(segments[segments.len() - 1].to, cubic.to);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }
}

#[test]
fn adaptive_flat_curve_is_one_segment() {
    let quadratic = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 0.1),
        to: point(2.0, 0.0),
    };
    let mut segments = std::vec::Vec::new();
    quadratic.for_each_subdivided(0.5, MAX_SUBDIVISION_DEPTH, &mut |s| segments.push(*s));
    assert_eq!(segments, std::vec![quadratic.baseline()]);
}

#[test]
fn adaptive_respects_tolerance() {
    let quadratic = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(50.0, 100.0),
        to: point(100.0, 0.0),
    };
    let mut segments = std::vec::Vec::new();
    quadratic.for_each_subdivided(0.5, MAX_SUBDIVISION_DEPTH, &mut |s| segments.push(*s));
    assert!(segments.len() > 1);
    assert!(segments.len() <= 1 << MAX_SUBDIVISION_DEPTH);

    // Every emitted point lies on the curve.
    for s in &segments {
        let t = s.to.x / 100.0;
        let on_curve: Point<f64> = quadratic.sample(t);
        assert!((on_curve.y - s.to.y).abs() < 1e-9);
    }
}

#[test]
fn adaptive_depth_is_bounded() {
    // A cusp-like curve with huge control points never gets flat within a few levels.
    let cubic = CubicBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl1: point(1.0e9, 1.0e9),
        ctrl2: point(-1.0e9, 1.0e9),
        to: point(0.0, 0.0),
    };
    let mut n = 0u32;
    cubic.for_each_subdivided(0.5, 4, &mut |_| n += 1);
    assert_eq!(n, 16);

    let nan = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(f64::NAN, 1.0),
        to: point(1.0, 0.0),
    };
    let mut n = 0u32;
    nan.for_each_subdivided(0.5, MAX_SUBDIVISION_DEPTH, &mut |_| n += 1);
    assert_eq!(n, 1);
}
