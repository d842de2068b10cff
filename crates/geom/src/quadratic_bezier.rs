use crate::flatten;
use crate::scalar::Scalar;
use crate::segment::{impl_segment, Segment};
use crate::{Box2D, CubicBezierSegment, LineSegment, Point};

#[cfg(test)]
use crate::point;

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> QuadraticBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl.to_vector() * S::TWO * one_t * t + self.to.to_vector() * t2
    }

    #[inline]
    pub fn from(&self) -> Point<S> {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        self.to
    }

    /// Split this curve into two sub-curves (de Casteljau).
    pub fn split(&self, t: S) -> (QuadraticBezierSegment<S>, QuadraticBezierSegment<S>) {
        let split_point = self.sample(t);

        (
            QuadraticBezierSegment {
                from: self.from,
                ctrl: self.from.lerp(self.ctrl, t),
                to: split_point,
            },
            QuadraticBezierSegment {
                from: split_point,
                ctrl: self.ctrl.lerp(self.to, t),
                to: self.to,
            },
        )
    }

    /// Elevate this curve to a third order bézier.
    pub fn to_cubic(&self) -> CubicBezierSegment<S> {
        CubicBezierSegment {
            from: self.from,
            ctrl1: (self.from + self.ctrl.to_vector() * S::TWO) / S::THREE,
            ctrl2: (self.to + self.ctrl.to_vector() * S::TWO) / S::THREE,
            to: self.to,
        }
    }

    #[inline]
    pub fn baseline(&self) -> LineSegment<S> {
        LineSegment {
            from: self.from,
            to: self.to,
        }
    }

    /// Distance between the control point and the baseline.
    ///
    /// Falls back to the distance between the control point and `from` when the
    /// baseline has no length.
    pub fn flatness(&self) -> S {
        match self.baseline().line_distance_to_point(self.ctrl) {
            Some(d) => d,
            None => (self.ctrl - self.from).length(),
        }
    }

    /// Approximates the curve with a fixed number of line segments
    /// ([`QUADRATIC_STEPS`](flatten::QUADRATIC_STEPS)).
    pub fn for_each_sampled<F>(&self, callback: &mut F)
    where
        F: FnMut(&LineSegment<S>),
    {
        flatten::for_each_sampled(self, flatten::QUADRATIC_STEPS, callback);
    }

    /// Approximates the curve by recursive subdivision until each piece's flatness
    /// is below `tolerance`, or `max_depth` is reached.
    pub fn for_each_subdivided<F>(&self, tolerance: S, max_depth: u32, callback: &mut F)
    where
        F: FnMut(&LineSegment<S>),
    {
        flatten::for_each_subdivided(self, tolerance, max_depth, callback);
    }

    /// Returns the smallest rectangle that contains the curve.
    pub fn bounding_box(&self) -> Box2D<S> {
        let mut min = Point::min(self.from, self.to);
        let mut max = Point::max(self.from, self.to);

        let tx = local_extremum_t(self.from.x, self.ctrl.x, self.to.x);
        let ty = local_extremum_t(self.from.y, self.ctrl.y, self.to.y);
        for t in [tx, ty].iter().flatten() {
            let p = self.sample(*t);
            min = Point::min(min, p);
            max = Point::max(max, p);
        }

        Box2D { min, max }
    }
}

// The parameter at which the derivative of a one-dimensional quadratic bézier
// vanishes, if it is within the curve.
fn local_extremum_t<S: Scalar>(from: S, ctrl: S, to: S) -> Option<S> {
    let div = from - S::TWO * ctrl + to;
    if div == S::ZERO {
        return None;
    }

    let t = (from - ctrl) / div;
    if t > S::ZERO && t < S::ONE {
        return Some(t);
    }

    None
}

impl<S: Scalar> Segment for QuadraticBezierSegment<S> {
    impl_segment!(S);
}

#[test]
fn bounding_box_for_monotonic_quadratic_bezier_segment() {
    let a = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(0.0, 0.0),
        to: point(2.0, 0.0),
    };

    let expected_aabb = Box2D {
        min: point(0.0, 0.0),
        max: point(2.0, 0.0),
    };

    assert_eq!(a.bounding_box(), expected_aabb);
}

#[test]
fn bounding_box_excludes_control_point() {
    let a = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 2.0),
        to: point(2.0, 0.0),
    };

    let tight = a.bounding_box();
    assert_eq!(tight.max.y, 1.0);
    assert_eq!(tight.min, point(0.0, 0.0));
    assert_eq!(tight.max.x, 2.0);
}

#[test]
fn flatness_of_quadratic() {
    let a = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(1.0, 3.0),
        to: point(2.0, 0.0),
    };
    assert_eq!(a.flatness(), 3.0);

    // Degenerate baseline.
    let b = QuadraticBezierSegment {
        from: point(1.0f64, 1.0),
        ctrl: point(4.0, 5.0),
        to: point(1.0, 1.0),
    };
    assert_eq!(b.flatness(), 5.0);
}

#[test]
fn split_quadratic_at_half() {
    let a = QuadraticBezierSegment {
        from: point(0.0f64, 0.0),
        ctrl: point(2.0, 4.0),
        to: point(4.0, 0.0),
    };
    let (l, r) = a.split(0.5);
    assert_eq!(l.from, a.from);
    assert_eq!(l.to, point(2.0, 2.0));
    assert_eq!(r.from, point(2.0, 2.0));
    assert_eq!(r.to, a.to);
    assert_eq!(l.ctrl, point(1.0, 2.0));
    assert_eq!(r.ctrl, point(3.0, 2.0));
}
