//! Circular arcs.

use crate::scalar::Scalar;
use crate::{vector, Angle, CubicBezierSegment, Point, Vector};

/// A circular arc.
///
/// Positive sweep angles go in the direction of increasing angles (counter-clockwise
/// when the y axis points up).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc<S> {
    pub center: Point<S>,
    pub radius: S,
    pub start_angle: Angle<S>,
    pub sweep_angle: Angle<S>,
}

impl<S: Scalar> Arc<S> {
    #[inline]
    pub fn from(&self) -> Point<S> {
        self.point_at(self.start_angle.radians)
    }

    fn point_at(&self, angle: S) -> Point<S> {
        self.center + vector(angle.cos(), angle.sin()) * self.radius
    }

    // Unit tangent in the direction of increasing angles.
    fn tangent_at(angle: S) -> Vector<S> {
        vector(-angle.sin(), angle.cos())
    }

    /// Approximates the arc with a sequence of cubic bézier curves, none of them
    /// spanning more than a quarter turn.
    ///
    /// The sweep is clamped to a full turn. Nothing is generated for an empty or
    /// non-finite sweep.
    pub fn for_each_cubic_bezier<F>(&self, callback: &mut F)
    where
        F: FnMut(&CubicBezierSegment<S>),
    {
        if !(self.sweep_angle.radians.abs() > S::EPSILON) {
            return;
        }
        let tau = S::TWO * S::PI();
        let sweep = self.sweep_angle.radians.max(-tau).min(tau);

        let quarter = S::FRAC_PI_2();
        let n = (sweep.abs() / quarter - S::EPSILON).ceil().max(S::ONE);
        let delta = sweep / n;

        // Control point distance, relative to the radius.
        let half = delta * S::HALF;
        let k = S::FOUR / S::THREE * (S::ONE - half.cos()) / half.sin();

        let count = n.to_u32().unwrap_or(1);
        let mut a0 = self.start_angle.radians;
        let mut from = self.point_at(a0);
        for i in 1..=count {
            let a1 = if i == count {
                self.start_angle.radians + sweep
            } else {
                a0 + delta
            };
            let to = self.point_at(a1);
            callback(&CubicBezierSegment {
                from,
                ctrl1: from + Self::tangent_at(a0) * (self.radius * k),
                ctrl2: to - Self::tangent_at(a1) * (self.radius * k),
                to,
            });
            a0 = a1;
            from = to;
        }
    }
}

#[cfg(test)]
use crate::point;

#[cfg(test)]
fn approx_eq(a: Point<f64>, b: Point<f64>) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn quarter_turn_is_one_curve() {
    let arc = Arc {
        center: point(0.0f64, 0.0),
        radius: 1.0,
        start_angle: Angle::radians(0.0),
        sweep_angle: Angle::frac_pi_2(),
    };

    let mut curves = std::vec::Vec::new();
    arc.for_each_cubic_bezier(&mut |c| curves.push(*c));
    assert_eq!(curves.len(), 1);

    let c = curves[0];
    assert!(approx_eq(c.from, point(1.0, 0.0)));
    assert!(approx_eq(c.to, point(0.0, 1.0)));
    let kappa = 0.5522847498307936;
    assert!(approx_eq(c.ctrl1, point(1.0, kappa)));
    assert!(approx_eq(c.ctrl2, point(kappa, 1.0)));
}

#[test]
fn control_points_depend_on_the_sweep_of_each_curve() {
    // Split into two sixths of a turn.
    let arc = Arc {
        center: point(0.0f64, 0.0),
        radius: 1.0,
        start_angle: Angle::radians(0.0),
        sweep_angle: Angle::degrees(120.0),
    };

    let mut curves = std::vec::Vec::new();
    arc.for_each_cubic_bezier(&mut |c| curves.push(*c));
    assert_eq!(curves.len(), 2);

    let k = 4.0 / 3.0 * Angle::degrees(15.0f64).radians.tan();
    let c = curves[0];
    assert!(approx_eq(c.from, point(1.0, 0.0)));
    assert!(approx_eq(c.ctrl1, point(1.0, k)));
    let mid = Angle::degrees(60.0f64).radians;
    assert!(approx_eq(c.to, point(mid.cos(), mid.sin())));
    assert!(approx_eq(c.ctrl2, c.to - vector(-mid.sin(), mid.cos()) * k));

    let end = Angle::degrees(120.0f64).radians;
    assert!(approx_eq(curves[1].to, point(end.cos(), end.sin())));
    assert!(approx_eq(curves[1].ctrl1, c.to + vector(-mid.sin(), mid.cos()) * k));

    // The control points of a quarter turn would overshoot.
    assert!(k < 0.5522847498307936);
}

#[test]
fn negative_sweep() {
    let arc = Arc {
        center: point(10.0f64, 10.0),
        radius: 2.0,
        start_angle: Angle::radians(0.0),
        sweep_angle: Angle::radians(-std::f64::consts::PI),
    };

    let mut curves = std::vec::Vec::new();
    arc.for_each_cubic_bezier(&mut |c| curves.push(*c));
    assert_eq!(curves.len(), 2);
    assert!(approx_eq(curves[0].from, point(12.0, 10.0)));
    assert!(approx_eq(curves[0].to, point(10.0, 8.0)));
    assert!(approx_eq(curves[1].to, point(8.0, 10.0)));
    // Going clockwise from the rightmost point, the curve heads down.
    assert!(curves[0].ctrl1.y < 10.0);
}

#[test]
fn sweep_is_clamped_to_a_full_turn() {
    let arc = Arc {
        center: point(0.0f64, 0.0),
        radius: 1.0,
        start_angle: Angle::radians(0.0),
        sweep_angle: Angle::radians(100.0),
    };

    let mut n = 0;
    arc.for_each_cubic_bezier(&mut |_| n += 1);
    assert_eq!(n, 4);

    let empty = Arc {
        sweep_angle: Angle::radians(f64::NAN),
        ..arc
    };
    let mut n = 0;
    empty.for_each_cubic_bezier(&mut |_| n += 1);
    assert_eq!(n, 0);
}
